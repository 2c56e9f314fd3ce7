//! Route definitions for the `/restaurants` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{reservation, restaurant};
use crate::state::AppState;

/// Routes mounted at `/restaurants`.
///
/// ```text
/// GET    /                    -> find_all_by (filtered listing)
/// POST   /                    -> create
/// GET    /{id}                -> find_by_id
/// GET    /{id}/reservations   -> reservation::list_by_restaurant
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(restaurant::find_all_by).post(restaurant::create),
        )
        .route("/{id}", get(restaurant::find_by_id))
        .route("/{id}/reservations", get(reservation::list_by_restaurant))
}
