use std::{collections::BTreeMap, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    storage::{read_profile_file, write_profile_file},
    validation::{validate_display_name, validate_email, validate_profile_name},
};

/// A Git identity that can be applied to user.name / user.email
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Git username (user.name)
    #[serde(rename = "name")]
    pub display_name: String,
    /// Git email address (user.email)
    pub email: String,
}

/// On-disk shape of the profiles file
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ProfileFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// Named profiles loaded from a single JSON file.
///
/// Each mutating operation rewrites the whole file before returning.
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    profiles: BTreeMap<String, Profile>,
}

impl ProfileStore {
    /// Loads profiles from `path`; a missing file yields an empty store
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let file = read_profile_file(&path)?;
        tracing::debug!(path = %path.display(), count = file.profiles.len(), "profiles loaded");
        Ok(Self {
            path,
            profiles: file.profiles,
        })
    }

    /// Writes every profile back to the store's file
    pub fn save(&self) -> Result<(), AppError> {
        let file = ProfileFile {
            profiles: self.profiles.clone(),
        };
        write_profile_file(&self.path, &file)
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Looks up a profile by name
    pub fn get(&self, name: &str) -> Result<&Profile, AppError> {
        self.profiles
            .get(name)
            .ok_or_else(|| AppError::ProfileNotFound(name.to_string()))
    }

    /// Profiles ordered by name
    pub fn list(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.profiles
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }

    /// Validates and inserts a new profile, then persists the store
    ///
    /// # Arguments
    /// * `name` - Unique, case-sensitive profile key
    /// * `display_name` - Value for user.name
    /// * `email` - Value for user.email
    pub fn add(&mut self, name: &str, display_name: &str, email: &str) -> Result<(), AppError> {
        validate_profile_name(name)?;
        validate_display_name(display_name)?;
        validate_email(email)?;

        if self.profiles.contains_key(name) {
            return Err(AppError::DuplicateProfile(name.to_string()));
        }

        self.profiles.insert(
            name.to_string(),
            Profile {
                display_name: display_name.to_string(),
                email: email.to_string(),
            },
        );
        self.save()?;
        tracing::info!(profile = name, "profile added");
        Ok(())
    }

    /// Removes a profile, then persists the store
    pub fn remove(&mut self, name: &str) -> Result<Profile, AppError> {
        let removed = self
            .profiles
            .remove(name)
            .ok_or_else(|| AppError::ProfileNotFound(name.to_string()))?;
        self.save()?;
        tracing::info!(profile = name, "profile removed");
        Ok(removed)
    }
}
