//! Error handling module for the registration service
//!
//! This module defines the application-level error type, its HTTP status
//! mapping, and the JSON body rendered for failed requests. Validation
//! failures of registration data are not errors at this level; they are
//! reported through a verdict.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the registration service
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request body missing, not JSON, or not a usable object
    #[error("Invalid request data")]
    InvalidRequest(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid request error; the detail is logged, not returned
    pub fn invalid_request<S: Into<String>>(detail: S) -> Self {
        Error::InvalidRequest(detail.into())
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Io(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Implement IntoResponse for automatic error responses in Axum
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
            "error": {
                "type": error_type(&self),
                "status": status.as_u16(),
            }
        }));

        if status.is_server_error() {
            tracing::error!(error = ?self, "Internal server error");
        } else {
            tracing::warn!(error = ?self, "Client error");
        }

        (status, body).into_response()
    }
}

/// Get a string representation of the error type
fn error_type(error: &Error) -> &'static str {
    match error {
        Error::Config(_) => "configuration_error",
        Error::InvalidRequest(_) => "invalid_request",
        Error::Io(_) => "io_error",
        Error::Internal(_) => "internal_error",
    }
}

/// Convert from envconfig::Error to our Error type
impl From<envconfig::Error> for Error {
    fn from(err: envconfig::Error) -> Self {
        Error::Config(err.to_string())
    }
}
