//! Field validation functions for registration data
//!
//! The email rule is deliberately shallow: any value containing `@` passes.

use super::error::{ValidationError, ValidationErrorKind, ValidationResult};

/// Minimum username length in characters
pub const DEFAULT_MIN_USERNAME_LENGTH: usize = 3;

/// Validate that a username is present and at least `min` characters long
///
/// Length is counted in Unicode scalar values, not bytes.
pub fn validate_username(username: Option<&str>, min: usize) -> ValidationResult<()> {
    let len = username.map(|u| u.chars().count()).unwrap_or(0);

    if len < min.max(1) {
        return Err(ValidationError::with_context(
            ValidationErrorKind::UsernameTooShort { min },
            "username",
            format!("Value length {} is less than minimum {}", len, min),
        ));
    }

    Ok(())
}

/// Validate that an email is present and contains `@`
pub fn validate_email(email: Option<&str>) -> ValidationResult<()> {
    match email {
        Some(value) if value.contains('@') => Ok(()),
        Some(value) if !value.is_empty() => Err(ValidationError::with_context(
            ValidationErrorKind::InvalidEmail,
            "email",
            format!("Missing '@' in {}", value),
        )),
        _ => Err(ValidationError::new(ValidationErrorKind::InvalidEmail, "email")),
    }
}
