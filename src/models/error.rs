//! Validation error types for registration data
//!
//! These errors never leave the validation boundary as failures: the
//! registration validator recovers every one of them and surfaces the
//! message as a reason string in the verdict.

use std::fmt;
use thiserror::Error;

use super::date::DateFormat;

/// Main validation error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The kind of validation error
    pub kind: ValidationErrorKind,
    /// The field that failed validation
    pub field: String,
    /// Optional additional context
    pub context: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(kind: ValidationErrorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            context: None,
        }
    }

    /// Create a validation error with additional context
    pub fn with_context(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            context: Some(context.into()),
        }
    }

    /// The human-readable reason reported to API clients
    pub fn reason(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(ctx) => write!(
                f,
                "Validation failed for field '{}': {} - {}",
                self.field, self.kind, ctx
            ),
            None => write!(
                f,
                "Validation failed for field '{}': {}",
                self.field, self.kind
            ),
        }
    }
}

/// Specific validation error types
///
/// The `Display` output of each variant is the exact reason string returned
/// to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Date is absent, not a string, or empty
    #[error("Date cannot be empty")]
    EmptyInput,

    /// Date matches none of the supported formats or is not a real calendar date
    #[error(
        "Invalid date format. Supported formats: {}. Received: {raw}",
        DateFormat::supported_labels()
    )]
    InvalidFormat { raw: String },

    /// Date lies after the reference date
    #[error("Birth date cannot be in the future")]
    FutureDate,

    /// Year outside the accepted window
    #[error("Birth year must be between {min} and {max}")]
    YearOutOfRange { min: i32, max: i32 },

    /// Username missing or too short
    #[error("Username must be at least {min} characters")]
    UsernameTooShort { min: usize },

    /// Email missing or without an `@`
    #[error("Invalid email format")]
    InvalidEmail,
}

impl ValidationErrorKind {
    /// Broad category of the failure
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValidationErrorKind::EmptyInput => ErrorCategory::EmptyInput,
            ValidationErrorKind::InvalidFormat { .. } => ErrorCategory::Format,
            ValidationErrorKind::FutureDate | ValidationErrorKind::YearOutOfRange { .. } => {
                ErrorCategory::Range
            },
            ValidationErrorKind::UsernameTooShort { .. } | ValidationErrorKind::InvalidEmail => {
                ErrorCategory::Field
            },
        }
    }
}

/// Coarse grouping of validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input was missing entirely
    EmptyInput,
    /// Input was present but unparseable
    Format,
    /// Parsed date violates a business range
    Range,
    /// Username or email rule failed
    Field,
}

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Ordered collection of validation errors
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validation error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record the error of a failed check, ignoring successes
    pub fn collect<T>(&mut self, result: ValidationResult<T>) {
        if let Err(e) = result {
            self.add(e);
        }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get all errors in insertion order
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Reason strings in insertion order
    pub fn reasons(&self) -> Vec<String> {
        self.errors.iter().map(ValidationError::reason).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed with {} error(s):", self.errors.len())?;
            for error in &self.errors {
                write!(f, "\n  - {}", error)?;
            }
            Ok(())
        }
    }
}
