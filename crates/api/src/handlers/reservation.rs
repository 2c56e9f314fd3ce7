//! Handlers for reservation projections. Read-only: reservations are
//! written by the booking flow, not this service.

use axum::extract::{Path, State};
use axum::Json;

use crate::dto::ReservationResponse;
use crate::error::AppResult;
use crate::handlers::parse_uuid;
use crate::state::AppState;

/// GET /reservations/{id}
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ReservationResponse>> {
    let id = parse_uuid("id", &id)?;
    let reservation = state.reservations.find_by_id(id).await?;
    Ok(Json(reservation.into()))
}

/// GET /restaurants/{id}/reservations
pub async fn list_by_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    let id = parse_uuid("id", &id)?;
    let reservations = state.reservations.list_by_restaurant(id).await?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}
