//! Registration endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::api::server::AppState;
use crate::api::RegistrationResponse;
use crate::error::{Error, Result};
use crate::logging::{LogMetrics, Timer};
use crate::models::RegistrationInput;

const REGISTRATION_PAGE: &str = include_str!("../../templates/register.html");

/// Registration form page
///
/// # Example
/// ```text
/// GET /
/// ```
pub async fn registration_page() -> Html<&'static str> {
    Html(REGISTRATION_PAGE)
}

/// Registration endpoint
///
/// Accepts `{"username", "email", "birth_date"}` and answers 201 with a new
/// user id when every rule passes, or 400 with the ordered failure reasons.
/// A body that is not a non-empty JSON object is rejected before validation.
///
/// # Example
/// ```text
/// POST /api/register
/// {"username": "chromeuser", "email": "chrome@test.com", "birth_date": "1990-05-15"}
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RegistrationResponse>)> {
    let Json(payload) = payload.map_err(|e| Error::invalid_request(e.body_text()))?;
    let input = parse_input(payload)?;

    let timer = Timer::start("validate_registration");
    let verdict = state.validator.validate(&input);
    timer.stop();

    if verdict.is_valid() {
        let user_id = Uuid::new_v4();
        LogMetrics::counter("registrations_total", 1, &[("outcome", "accepted")]);
        tracing::info!(%user_id, "Registration accepted");

        Ok((StatusCode::CREATED, Json(RegistrationResponse::accepted(user_id))))
    } else {
        let reasons = verdict.reasons();
        LogMetrics::counter("registrations_total", 1, &[("outcome", "rejected")]);
        tracing::info!(errors = ?reasons, "Registration rejected");

        Ok((StatusCode::BAD_REQUEST, Json(RegistrationResponse::rejected(reasons))))
    }
}

/// Extract registration fields from a JSON body
///
/// Only a non-empty object is usable; missing or non-string fields become `None`.
fn parse_input(payload: Value) -> Result<RegistrationInput> {
    match &payload {
        Value::Object(fields) if !fields.is_empty() => {},
        _ => {
            return Err(Error::invalid_request(
                "Request body must be a non-empty JSON object",
            ))
        },
    }

    serde_json::from_value(payload).map_err(|e| Error::invalid_request(e.to_string()))
}
