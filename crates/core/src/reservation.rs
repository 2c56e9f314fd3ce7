//! Reservation read-side model, storage port, and query use case.
//!
//! Reservations are an output projection only: no write-side operations are
//! exposed here. Rows are created by a separate booking flow outside this
//! service.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::CoreError;
use crate::messages;

/// Summary of the reserved service, embedded in every projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSummary {
    pub restaurant_id: Uuid,
    pub restaurant_name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: Uuid,
    pub code: String,
    pub service: ServiceSummary,
    pub tables: i32,
    pub client_id: Uuid,
    pub client_email: String,
}

/// Read-only storage contract for reservations.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, CoreError>;

    async fn list_by_restaurant(&self, restaurant_id: Uuid)
        -> Result<Vec<Reservation>, CoreError>;
}

/// Query operations over the reservation store.
pub struct ReservationService<S> {
    store: S,
}

impl<S: ReservationStore> ReservationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Reservation, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(messages::RESERVATION_NOT_FOUND.into()))
    }

    /// All reservations of one restaurant; an empty result is `NotFound`.
    pub async fn list_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<Reservation>, CoreError> {
        let found = self.store.list_by_restaurant(restaurant_id).await?;
        if found.is_empty() {
            return Err(CoreError::NotFound(messages::RESERVATION_NOT_FOUND.into()));
        }
        Ok(found)
    }
}
