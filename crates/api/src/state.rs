use std::sync::Arc;

use mesa_core::reservation::ReservationService;
use mesa_core::restaurant::RestaurantService;
use mesa_db::store::{PgReservationStore, PgRestaurantStore};
use mesa_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Restaurant registration and query use cases.
    pub restaurants: Arc<RestaurantService<PgRestaurantStore>>,
    /// Reservation read-side queries.
    pub reservations: Arc<ReservationService<PgReservationStore>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Compose the use cases with their Postgres-backed stores. This is
    /// the single place where ports meet adapters.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            restaurants: Arc::new(RestaurantService::new(PgRestaurantStore::new(pool.clone()))),
            reservations: Arc::new(ReservationService::new(PgReservationStore::new(pool))),
            config: Arc::new(config),
        }
    }
}
