//! Integration tests for the registration HTTP API
//!
//! These tests drive the router in-process and check status codes and JSON bodies.

use std::sync::Arc;

use axum::http::StatusCode;
use registration_service::{
    api::server::{create_router, create_router_with_validator},
    config::{Config, FeatureFlags, ServerConfig, ValidationConfig},
    CalendarDate, FixedClock, RegistrationValidator, ValidationRules,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Create a test configuration
fn create_test_config() -> Arc<Config> {
    Arc::new(Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "debug".to_string(),
            environment: "test".to_string(),
            request_timeout_secs: 30,
        },
        validation: ValidationConfig::default(),
        features: FeatureFlags {
            registration_page: true,
            cors: true,
        },
    })
}

/// Router whose validator treats 2024-06-01 as today
fn create_test_app() -> axum::Router {
    let today = CalendarDate::from_ymd(2024, 6, 1).unwrap();
    let validator =
        RegistrationValidator::new(ValidationRules::default(), Arc::new(FixedClock(today)));
    create_router_with_validator(create_test_config(), validator)
}

async fn post_register(app: axum::Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/register")
                .header("content-type", "application/json")
                .body(axum::body::Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_register_chrome_format_succeeds() {
    let body = json!({
        "username": "chromeuser",
        "email": "chrome@test.com",
        "birth_date": "1990-05-15",
    });
    let (status, json) = post_register(create_test_app(), body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Registration successful!");
    assert!(json["user_id"].is_string());
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn test_register_safari_and_european_formats_succeed() {
    for birth_date in ["05/15/1990", "15/05/1990"] {
        let body = json!({
            "username": "safariuser",
            "email": "safari@example.com",
            "birth_date": birth_date,
        });
        let (status, json) = post_register(create_test_app(), body.to_string()).await;

        assert_eq!(status, StatusCode::CREATED, "{} should be accepted", birth_date);
        assert_eq!(json["success"], true);
    }
}

#[tokio::test]
async fn test_register_collects_all_errors_in_order() {
    let body = json!({
        "username": "ab",
        "email": "invalid-email",
        "birth_date": "not-a-date",
    });
    let (status, json) = post_register(create_test_app(), body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Registration data validation failed");
    assert_eq!(
        json["errors"],
        json!([
            "Username must be at least 3 characters",
            "Invalid email format",
            "Invalid date format. Supported formats: YYYY-MM-DD, MM/DD/YYYY, DD/MM/YYYY. Received: not-a-date",
        ])
    );
}

#[tokio::test]
async fn test_register_future_and_old_dates() {
    let cases = [
        ("2030-01-01", "Birth date cannot be in the future"),
        ("1850-01-01", "Birth year must be between 1900 and 2024"),
    ];

    for (birth_date, reason) in cases {
        let body = json!({
            "username": "validuser",
            "email": "user@example.com",
            "birth_date": birth_date,
        });
        let (status, json) = post_register(create_test_app(), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"], json!([reason]));
    }
}

#[tokio::test]
async fn test_register_missing_and_non_string_fields() {
    let body = json!({ "username": "tester", "email": 7 });
    let (status, json) = post_register(create_test_app(), body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["errors"],
        json!(["Invalid email format", "Date cannot be empty"])
    );
}

#[tokio::test]
async fn test_register_malformed_bodies_return_invalid_request() {
    for body in ["{not json", "{}", "null", "[]"] {
        let (status, json) = post_register(create_test_app(), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid request data");
        assert!(json.get("errors").is_none());
    }
}

#[tokio::test]
async fn test_register_without_json_content_type() {
    let response = create_test_app()
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/register")
                .body(axum::body::Body::from("username=abc"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let app = create_router(create_test_config());

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/api/health")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_build_info_endpoint() {
    let app = create_router(create_test_config());

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/api/build")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert!(json["version"].is_string());
    assert!(json["commit"].is_string());
    assert!(json["build_time"].is_string());
}

#[tokio::test]
async fn test_registration_page_is_served() {
    let app = create_router(create_test_config());

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("/api/register"));
}

#[tokio::test]
async fn test_request_id_header_is_returned() {
    let app = create_router(create_test_config());

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/api/health")
                .header("x-request-id", "test-request-42")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "test-request-42");
}

#[tokio::test]
async fn test_cors_headers_are_set() {
    let app = create_router(create_test_config());

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("OPTIONS")
                .uri("/api/register")
                .header("Origin", "http://example.com")
                .header("Access-Control-Request-Method", "POST")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("access-control-allow-origin"));
    assert!(response.headers().contains_key("access-control-allow-methods"));
}

#[tokio::test]
async fn test_unknown_endpoint_returns_404() {
    let app = create_router(create_test_config());

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/unknown/endpoint")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_config_validation() {
    let mut config = (*create_test_config()).clone();

    config.server.port = 0;
    assert!(config.validate().is_err());

    config.server.port = 5000;
    assert!(config.validate().is_ok());
}
