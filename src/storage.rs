use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{error::AppError, profile::ProfileFile};

/// Profiles file in user's home directory
const GLOBAL_PROFILES_FILE: &str = ".gcm_profiles.json";

/// Gets the path to the profiles file
pub fn default_profile_path() -> Result<PathBuf, AppError> {
    let home_dir: PathBuf = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
    Ok(home_dir.join(GLOBAL_PROFILES_FILE))
}

/// Reads the profiles file, treating a missing or blank file as empty
pub fn read_profile_file(path: &Path) -> Result<ProfileFile, AppError> {
    let file_contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no profiles file yet");
            return Ok(ProfileFile::default());
        }
        Err(source) => {
            return Err(AppError::ConfigRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if file_contents.trim().is_empty() {
        return Ok(ProfileFile::default());
    }

    serde_json::from_str(&file_contents).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Rewrites the profiles file in full.
///
/// The JSON lands in a temporary file beside `path` which is then renamed
/// over it, so readers never observe a half-written file. A symlinked `path`
/// is resolved first so the link survives and its target gets the update.
pub fn write_profile_file(path: &Path, file: &ProfileFile) -> Result<(), AppError> {
    let write_error = |reason: String| AppError::ConfigWrite {
        path: path.to_path_buf(),
        reason,
    };

    let mut json: String =
        serde_json::to_string_pretty(file).map_err(|err| write_error(err.to_string()))?;
    json.push('\n');

    let target: PathBuf = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(err) if err.kind() == ErrorKind::NotFound => path.to_path_buf(),
        Err(err) => return Err(write_error(err.to_string())),
    };

    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|err| write_error(err.to_string()))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|err| write_error(err.to_string()))?;
    temp.write_all(json.as_bytes())
        .map_err(|err| write_error(err.to_string()))?;
    temp.persist(&target)
        .map_err(|err| write_error(err.error.to_string()))?;

    tracing::debug!(path = %target.display(), "profiles saved");
    Ok(())
}
