//! Handlers for the `/restaurants` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::Json;
use mesa_core::cuisine::Cuisine;
use mesa_core::error::CoreError;
use mesa_core::messages;
use serde::Deserialize;

use crate::dto::{RestaurantRequest, RestaurantResponse};
use crate::error::{AppError, AppResult};
use crate::handlers::parse_uuid;
use crate::state::AppState;

/// POST /restaurants/
///
/// Returns `201 Created` with a `Location` header pointing at the new
/// resource; the body is empty.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<RestaurantRequest>, JsonRejection>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1])> {
    let Json(request) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;
    let draft = request.into_draft()?;

    let id = state.restaurants.create(&draft).await?;
    tracing::info!(%id, "restaurant registered");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/restaurants/{id}"))],
    ))
}

/// GET /restaurants/{id}
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RestaurantResponse>> {
    let id = parse_uuid("id", &id)?;
    let restaurant = state.restaurants.find_by_id(id).await?;
    Ok(Json(restaurant.into()))
}

/// Query parameters for the filtered listing. `cuisines` is a
/// comma-separated list of cuisine names, e.g. `?cuisines=ITALIAN,VEGAN`.
#[derive(Debug, Deserialize)]
pub struct FindRestaurantsParams {
    pub name: Option<String>,
    pub location: Option<String>,
    pub cuisines: Option<String>,
}

/// GET /restaurants/
pub async fn find_all_by(
    State(state): State<AppState>,
    Query(params): Query<FindRestaurantsParams>,
) -> AppResult<Json<Vec<RestaurantResponse>>> {
    let cuisines = params
        .cuisines
        .as_deref()
        .map(parse_cuisines)
        .transpose()?;

    let found = state
        .restaurants
        .find_all_by(
            params.name.as_deref(),
            params.location.as_deref(),
            cuisines.as_deref(),
        )
        .await?;

    Ok(Json(found.into_iter().map(Into::into).collect()))
}

fn parse_cuisines(raw: &str) -> Result<Vec<Cuisine>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            Cuisine::from_name(part).ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!(
                    "cuisines: {}",
                    messages::INVALID_CUISINE
                )))
            })
        })
        .collect()
}
