//! Health and build information endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::api::{HealthResponse, HealthStatus, BUILD_INFO};

/// Liveness check endpoint
///
/// Always returns `{"status": "ok"}`; the service has no dependencies to probe.
///
/// # Example
/// ```text
/// GET /api/health
/// ```
pub async fn health_check() -> Response {
    let response = HealthResponse {
        status: HealthStatus::Ok,
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Build information endpoint
///
/// # Example
/// ```text
/// GET /api/build
/// ```
pub async fn build_info() -> Response {
    (StatusCode::OK, Json(&BUILD_INFO)).into_response()
}
