//! HTTP handlers, one module per resource.

pub mod reservation;
pub mod restaurant;

use mesa_core::error::CoreError;
use mesa_core::messages;
use uuid::Uuid;

use crate::error::AppError;

/// Parse a path segment as a UUID; failures surface as the documented
/// `field: message` validation error instead of axum's default rejection.
pub(crate) fn parse_uuid(field: &str, raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "{field}: {}",
            messages::FIELD_UUID
        )))
    })
}
