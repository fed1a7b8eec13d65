//! Data models for the registration service
//!
//! This module contains the validation core: birth date normalization,
//! the birth date range rules, the username and email field rules, and the
//! registration validator that combines them.

pub mod birth_date;
pub mod clock;
pub mod date;
pub mod error;
pub mod registration;
pub mod validation;

// Re-export commonly used types
pub use birth_date::{validate_birth_date, BirthDateRule, BirthDateVerdict, VALID_DATE_MESSAGE};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{normalize, normalize_with_format, CalendarDate, DateFormat};
pub use error::{ErrorCategory, ValidationError, ValidationErrorKind, ValidationErrors};
pub use registration::{
    RegistrationInput, RegistrationValidator, ValidationRules, ValidationVerdict,
};
pub use validation::{validate_email, validate_username};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // Ensure all key types are accessible
        let _input = RegistrationInput::new("user", "user@example.com", "1990-05-15");
        let _format = DateFormat::Iso;
        let _error = ValidationError::new(ValidationErrorKind::EmptyInput, "birth_date");
        let _rule = BirthDateRule::default();
        let _validator = RegistrationValidator::default();
    }
}
