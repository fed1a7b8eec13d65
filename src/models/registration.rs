//! Registration data validation
//!
//! [`RegistrationValidator`] runs the username, email and birth date checks
//! independently and collects every failure, in that order, into a
//! [`ValidationVerdict`].

use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

use super::birth_date::{BirthDateRule, DEFAULT_MIN_BIRTH_YEAR};
use super::clock::{Clock, SystemClock};
use super::date::CalendarDate;
use super::error::{ValidationError, ValidationErrors};
use super::validation::{validate_email, validate_username, DEFAULT_MIN_USERNAME_LENGTH};

/// Registration data as submitted by a client
///
/// Missing fields and non-string JSON values both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    #[serde(default, deserialize_with = "string_or_none")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "string_or_none")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "string_or_none")]
    pub birth_date: Option<String>,
}

impl RegistrationInput {
    /// Create input with every field present
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            username: Some(username.into()),
            email: Some(email.into()),
            birth_date: Some(birth_date.into()),
        }
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

/// Aggregate result of validating registration data
///
/// Valid exactly when there are no errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    errors: ValidationErrors,
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failure reasons in check order
    pub fn reasons(&self) -> Vec<String> {
        self.errors.reasons()
    }

    /// Underlying errors in check order
    pub fn errors(&self) -> &[ValidationError] {
        self.errors.errors()
    }
}

impl From<ValidationErrors> for ValidationVerdict {
    fn from(errors: ValidationErrors) -> Self {
        Self { errors }
    }
}

/// Thresholds used by the registration rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_username_length: usize,
    pub min_birth_year: i32,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
            min_birth_year: DEFAULT_MIN_BIRTH_YEAR,
        }
    }
}

/// Validates registration input against the username, email and birth date rules
#[derive(Clone)]
pub struct RegistrationValidator {
    rules: ValidationRules,
    clock: Arc<dyn Clock>,
}

impl Default for RegistrationValidator {
    fn default() -> Self {
        Self::new(ValidationRules::default(), Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for RegistrationValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationValidator")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl RegistrationValidator {
    pub fn new(rules: ValidationRules, clock: Arc<dyn Clock>) -> Self {
        Self { rules, clock }
    }

    /// Validate input using the validator's clock for "today"
    pub fn validate(&self, input: &RegistrationInput) -> ValidationVerdict {
        self.validate_on(input, self.clock.today())
    }

    /// Validate input against an explicit reference date
    pub fn validate_on(&self, input: &RegistrationInput, today: CalendarDate) -> ValidationVerdict {
        let mut errors = ValidationErrors::new();

        errors.collect(validate_username(
            input.username.as_deref(),
            self.rules.min_username_length,
        ));
        errors.collect(validate_email(input.email.as_deref()));
        errors.collect(
            BirthDateRule::new(self.rules.min_birth_year)
                .validate(input.birth_date.as_deref(), today),
        );

        if !errors.is_empty() {
            tracing::debug!(errors = %errors, "Registration data rejected");
        }

        ValidationVerdict::from(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clock::FixedClock;

    fn validator() -> RegistrationValidator {
        let today = CalendarDate::from_ymd(2024, 6, 1).unwrap();
        RegistrationValidator::new(ValidationRules::default(), Arc::new(FixedClock(today)))
    }

    #[test]
    fn test_valid_registration() {
        let verdict = validator().validate(&RegistrationInput::new(
            "chromeuser",
            "chrome@test.com",
            "1990-05-15",
        ));
        assert!(verdict.is_valid());
        assert!(verdict.reasons().is_empty());
    }

    #[test]
    fn test_every_failure_collected_in_order() {
        let verdict =
            validator().validate(&RegistrationInput::new("ab", "invalid-email", "not-a-date"));
        assert!(!verdict.is_valid());
        assert_eq!(
            verdict.reasons(),
            vec![
                "Username must be at least 3 characters".to_string(),
                "Invalid email format".to_string(),
                "Invalid date format. Supported formats: YYYY-MM-DD, MM/DD/YYYY, DD/MM/YYYY. Received: not-a-date".to_string(),
            ]
        );
    }

    #[test]
    fn test_short_username_reported_alone() {
        let verdict =
            validator().validate(&RegistrationInput::new("ab", "user@example.com", "05/15/1990"));
        assert_eq!(
            verdict.reasons(),
            vec!["Username must be at least 3 characters".to_string()]
        );
    }

    #[test]
    fn test_missing_fields() {
        let verdict = validator().validate(&RegistrationInput::default());
        assert_eq!(
            verdict.reasons(),
            vec![
                "Username must be at least 3 characters".to_string(),
                "Invalid email format".to_string(),
                "Date cannot be empty".to_string(),
            ]
        );
    }

    #[test]
    fn test_uses_clock_for_range() {
        let verdict =
            validator().validate(&RegistrationInput::new("olduser", "old@example.com", "1850-01-01"));
        assert_eq!(
            verdict.reasons(),
            vec!["Birth year must be between 1900 and 2024".to_string()]
        );
    }

    #[test]
    fn test_deserialize_ignores_non_string_values() {
        let input: RegistrationInput = serde_json::from_str(
            r#"{"username": "tester", "email": 42, "birth_date": null}"#,
        )
        .unwrap();
        assert_eq!(input.username.as_deref(), Some("tester"));
        assert_eq!(input.email, None);
        assert_eq!(input.birth_date, None);
    }
}
