use std::path::PathBuf;

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or missing user input
    #[error("validation error: {0}")]
    Validation(String),
    /// Profile name already present in the store
    #[error("profile '{0}' already exists")]
    DuplicateProfile(String),
    /// Profile name absent from the store
    #[error("profile '{0}' does not exist")]
    ProfileNotFound(String),
    /// Profile file exists but is not valid JSON
    #[error("failed to parse profiles in {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Profile file exists but could not be read
    #[error("failed to read profiles from {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Profile file could not be written
    #[error("failed to write profiles to {}: {reason}", path.display())]
    ConfigWrite { path: PathBuf, reason: String },
    /// Git could not be started or exited unsuccessfully
    #[error("`{command}` failed: {reason}")]
    ExternalProcess { command: String, reason: String },
    /// No home directory to place the profile file in
    #[error("failed to find the home directory")]
    HomeDirNotFound,
    /// Error when user input fails.
    #[error("prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),
    /// Error writing command output
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
