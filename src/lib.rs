//! Registration service library
//!
//! Exposes the validation core and the HTTP layer for integration tests and
//! for embedding in other applications.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export the validation core
pub use models::{
    normalize, validate_birth_date, BirthDateRule, CalendarDate, Clock, DateFormat, FixedClock,
    RegistrationInput, RegistrationValidator, SystemClock, ValidationError, ValidationErrorKind,
    ValidationRules, ValidationVerdict,
};

// Re-export API server functions
pub use api::server::{create_router, create_router_with_validator, create_server, shutdown_signal};
