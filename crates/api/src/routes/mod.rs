pub mod health;
pub mod reservation;
pub mod restaurant;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /restaurants                      list (filtered), create
/// /restaurants/{id}                 get by id
/// /restaurants/{id}/reservations    reservation listing (read-only)
/// /reservations/{id}                reservation by id (read-only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/restaurants", restaurant::router())
        .nest("/reservations", reservation::router())
}
