//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use roster_api::error::AppError;
use roster_core::error::CoreError;
use roster_core::validation::{ValidationFailure, Violation};

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn uid_failure() -> ValidationFailure {
    ValidationFailure::from_violations(vec![Violation {
        path: "uid".into(),
        constraint: "not_blank".into(),
        message: "must not be blank".into(),
    }])
    .unwrap_err()
}

// ---------------------------------------------------------------------------
// Test: both validation origins produce the same body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn binding_and_service_failures_map_identically() {
    let (binding_status, binding_json) = error_to_response(AppError::Binding(uid_failure())).await;
    let (service_status, service_json) =
        error_to_response(AppError::Core(CoreError::Validation(uid_failure()))).await;

    assert_eq!(binding_status, StatusCode::BAD_REQUEST);
    assert_eq!(service_status, StatusCode::BAD_REQUEST);
    assert_eq!(binding_json, serde_json::json!({"uid": "must not be blank"}));
    assert_eq!(binding_json, service_json);
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Malformed maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_record_returns_400() {
    let err = AppError::Core(CoreError::Malformed("not an object".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "not an object");
}

// ---------------------------------------------------------------------------
// Test: AppError::InternalError maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret configuration leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(
        !json.to_string().contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Internal maps to 500 and sanitizes like InternalError
// ---------------------------------------------------------------------------

#[tokio::test]
async fn core_internal_error_returns_500_and_sanitizes() {
    let err = AppError::Core(CoreError::Internal("serializer panic details".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json.to_string().contains("serializer"));
}
