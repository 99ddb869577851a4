/*
[INPUT]:  Raw form field values
[OUTPUT]: Validated inputs or user-facing error messages
[POS]:    Validation layer - local checks ahead of any network call
[UPDATE]: When form rules or their messages change
*/

use thiserror::Error;

const MIN_PASSWORD_LEN: usize = 6;
const MIN_TITLE_LEN: usize = 3;

/// Local validation failures, worded for direct display.
///
/// These never reach the network layer and are distinct from
/// server-sourced errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("Name, email and password are required.")]
    MissingRegistrationFields,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Title must be at least 3 characters.")]
    TitleTooShort,
}

/// Login form: email and password non-empty after trimming
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Register form: required fields, password length, password confirmation
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() || email.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingRegistrationFields);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Task form: title at least 3 characters after trimming
pub fn validate_task_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().chars().count() < MIN_TITLE_LEN {
        return Err(ValidationError::TitleTooShort);
    }
    Ok(())
}
