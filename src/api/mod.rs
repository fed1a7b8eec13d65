//! API module for the registration service
//!
//! This module contains the HTTP endpoints and server setup. Handlers only
//! translate between JSON and the validation core in [`crate::models`].

pub mod health;
pub mod register;
pub mod server;

pub use health::{build_info, health_check};
pub use register::{register, registration_page};
pub use server::{create_router, create_router_with_validator, create_server, shutdown_signal};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Build information populated at compile time
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    commit: match option_env!("GIT_COMMIT") {
        Some(commit) => commit,
        None => "unknown",
    },
    build_time: match option_env!("BUILD_TIME") {
        Some(time) => time,
        None => "unknown",
    },
};

/// Build information structure
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    /// Application version from Cargo.toml
    pub version: &'static str,
    /// Git commit hash
    pub commit: &'static str,
    /// Build timestamp
    pub build_time: &'static str,
}

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: HealthStatus,
    /// Current timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Health status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is running
    Ok,
}

/// Body returned by the registration endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,

    /// Identifier assigned to an accepted registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,

    /// Failure reasons in check order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl RegistrationResponse {
    /// Response for accepted registration data
    pub fn accepted(user_id: Uuid) -> Self {
        Self {
            success: true,
            message: "Registration successful!".to_string(),
            user_id: Some(user_id),
            errors: Vec::new(),
        }
    }

    /// Response for rejected registration data
    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: "Registration data validation failed".to_string(),
            user_id: None,
            errors,
        }
    }
}
