//! Birth date business rules
//!
//! Checks run in a fixed order and stop at the first failure, so a single
//! call reports at most one reason:
//! 1. the date must not be after today
//! 2. the year must lie between the minimum year and the current year

use serde::Serialize;

use super::date::{normalize, CalendarDate};
use super::error::{ValidationError, ValidationErrorKind, ValidationResult};

/// Earliest accepted birth year
pub const DEFAULT_MIN_BIRTH_YEAR: i32 = 1900;

/// Reason reported when a birth date passes every rule
pub const VALID_DATE_MESSAGE: &str = "Date format is valid";

/// Range rules for birth dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDateRule {
    min_year: i32,
}

impl Default for BirthDateRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_BIRTH_YEAR)
    }
}

impl BirthDateRule {
    pub fn new(min_year: i32) -> Self {
        Self { min_year }
    }

    /// Apply the range rules to a normalized date
    ///
    /// Returns the success reason when the date passes.
    pub fn check(&self, date: CalendarDate, today: CalendarDate) -> ValidationResult<&'static str> {
        if date > today {
            return Err(ValidationError::with_context(
                ValidationErrorKind::FutureDate,
                "birth_date",
                format!("{} is after {}", date, today),
            ));
        }

        if date.year() < self.min_year || date.year() > today.year() {
            return Err(ValidationError::new(
                ValidationErrorKind::YearOutOfRange {
                    min: self.min_year,
                    max: today.year(),
                },
                "birth_date",
            ));
        }

        Ok(VALID_DATE_MESSAGE)
    }

    /// Normalize and check a raw birth date in one step
    pub fn validate(&self, raw: Option<&str>, today: CalendarDate) -> ValidationResult<CalendarDate> {
        let date = normalize(raw)?;
        self.check(date, today)?;
        Ok(date)
    }
}

/// Outcome of validating a single birth date field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthDateVerdict {
    pub valid: bool,
    /// Success reason or the single failure reason
    pub message: String,
}

/// Validate a raw birth date against the default rules
pub fn validate_birth_date(raw: Option<&str>, today: CalendarDate) -> BirthDateVerdict {
    match BirthDateRule::default().validate(raw, today) {
        Ok(_) => BirthDateVerdict {
            valid: true,
            message: VALID_DATE_MESSAGE.to_string(),
        },
        Err(e) => BirthDateVerdict {
            valid: false,
            message: e.reason(),
        },
    }
}
