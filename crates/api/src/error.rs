use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mesa_core::error::CoreError;
use mesa_core::messages;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{"errors": "..."}` envelope
/// the API speaks: a single human-readable message per error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mesa_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for invalid arguments the domain never saw, e.g. an
    /// unreadable request body.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        messages::INTERNAL_ERROR.to_string(),
                    )
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({ "errors": message });

        (status, axum::Json(body)).into_response()
    }
}
