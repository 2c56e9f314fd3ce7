//! Implementations of the `mesa-core` storage ports, backed by PostgreSQL.
//!
//! This is the only place that translates sqlx failures into domain
//! errors. In particular, a unique violation on `uq_restaurants_name` is
//! mapped to the duplicate-name conflict, which makes the database
//! constraint the authoritative uniqueness signal regardless of any
//! pre-check the use case performed.

use async_trait::async_trait;
use mesa_core::cuisine::Cuisine;
use mesa_core::error::CoreError;
use mesa_core::messages;
use mesa_core::reservation::{Reservation, ReservationStore};
use mesa_core::restaurant::{NewRestaurant, Restaurant, RestaurantStore};
use uuid::Uuid;

use crate::repositories::{ReservationRepo, RestaurantRepo};
use crate::DbPool;

pub struct PgRestaurantStore {
    pool: DbPool,
}

impl PgRestaurantStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantStore for PgRestaurantStore {
    async fn exists_name(&self, name: &str) -> Result<bool, CoreError> {
        RestaurantRepo::exists_name(&self.pool, name)
            .await
            .map_err(internal)
    }

    async fn save(&self, draft: &NewRestaurant) -> Result<Restaurant, CoreError> {
        match RestaurantRepo::insert(&self.pool, draft).await {
            Ok(row) => row.into_domain(),
            Err(err) if is_unique_name_violation(&err) => {
                Err(CoreError::Conflict(messages::DUPLICATE_NAME.into()))
            }
            Err(err) => Err(internal(err)),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, CoreError> {
        RestaurantRepo::find_by_id(&self.pool, id)
            .await
            .map_err(internal)?
            .map(|row| row.into_domain())
            .transpose()
    }

    async fn find_all_by(
        &self,
        name: Option<&str>,
        location: Option<&str>,
        cuisines: Option<&[Cuisine]>,
    ) -> Result<Vec<Restaurant>, CoreError> {
        let cuisine_names = cuisines
            .map(|cs| cs.iter().map(|c| c.as_str().to_string()).collect::<Vec<_>>());
        RestaurantRepo::find_all_by(&self.pool, name, location, cuisine_names)
            .await
            .map_err(internal)?
            .into_iter()
            .map(|row| row.into_domain())
            .collect()
    }
}

pub struct PgReservationStore {
    pool: DbPool,
}

impl PgReservationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for PgReservationStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, CoreError> {
        Ok(ReservationRepo::find_by_id(&self.pool, id)
            .await
            .map_err(internal)?
            .map(|row| row.into_domain()))
    }

    async fn list_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<Reservation>, CoreError> {
        Ok(ReservationRepo::list_by_restaurant(&self.pool, restaurant_id)
            .await
            .map_err(internal)?
            .into_iter()
            .map(|row| row.into_domain())
            .collect())
    }
}

/// True for a PostgreSQL unique violation (23505) on the restaurant name
/// constraint. Any other database failure is an internal error.
fn is_unique_name_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_restaurants_name")
        }
        _ => false,
    }
}

fn internal(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "database error");
    CoreError::Internal(err.to_string())
}
