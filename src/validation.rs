use validator::ValidateEmail;

use crate::error::AppError;

// Validate input helper functions

/// Validates a profile name (the key in the profile store)
pub fn validate_profile_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        Err(AppError::Validation("Profile name cannot be empty".to_string()))
    } else {
        Ok(())
    }
}

/// Validates a display name (git user.name)
pub fn validate_display_name(display_name: &str) -> Result<(), AppError> {
    if display_name.trim().is_empty() {
        Err(AppError::Validation("Display name cannot be empty".to_string()))
    } else {
        Ok(())
    }
}

/// Validates email input
pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        Err(AppError::Validation("Email cannot be empty".to_string()))
    } else if !email.validate_email() {
        Err(AppError::Validation(format!("invalid email address: {email}")))
    } else {
        Ok(())
    }
}

/// Validates a commit subject, which is the only required commit prompt
pub fn validate_subject(subject: &str) -> Result<(), AppError> {
    if subject.trim().is_empty() {
        Err(AppError::Validation("Commit message cannot be empty".to_string()))
    } else {
        Ok(())
    }
}
