//! Route definitions for the `/reservations` resource.
//!
//! Restaurant-scoped reservation listing is mounted via
//! [`super::restaurant::router`]; this module only provides lookup by id.

use axum::routing::get;
use axum::Router;

use crate::handlers::reservation;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(reservation::find_by_id))
}
