//! Tests for `AppError` → HTTP response mapping.
//!
//! These verify that each error variant produces the correct status code
//! and `{"errors": ...}` envelope. They do not need an HTTP server; they
//! call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use mesa_api::error::AppError;
use mesa_core::error::CoreError;
use mesa_core::messages;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400_with_field_message() {
    let err = AppError::Core(CoreError::Validation(
        "name: O campo deve estar preenchido".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"], "name: O campo deve estar preenchido");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict(messages::DUPLICATE_NAME.into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::CONFLICT);
    assert_eq!(json["errors"], "Nome já cadastrado!");
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound(messages::RESTAURANT_NOT_FOUND.into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["errors"], "Restaurante(s) não existe!");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let err = AppError::BadRequest("corpo da requisição ilegível".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"], "corpo da requisição ilegível");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal(
        "connection refused: secret credentials".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    // The response body must not leak the original error details.
    let body_text = json.to_string();
    assert!(
        !body_text.contains("secret"),
        "internal error response must not leak details"
    );
    assert_eq!(json["errors"], messages::INTERNAL_ERROR);
}
