//! Reservation row model, joined with its restaurant summary.

use chrono::NaiveDate;
use mesa_core::reservation::{Reservation, ServiceSummary};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from `reservations` joined with the owning restaurant's name.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationRow {
    pub id: Uuid,
    pub code: String,
    pub restaurant_id: Uuid,
    pub restaurant_name: String,
    pub service_date: NaiveDate,
    pub tables: i32,
    pub client_id: Uuid,
    pub client_email: String,
}

impl ReservationRow {
    pub fn into_domain(self) -> Reservation {
        Reservation {
            id: self.id,
            code: self.code,
            service: ServiceSummary {
                restaurant_id: self.restaurant_id,
                restaurant_name: self.restaurant_name,
                date: self.service_date,
            },
            tables: self.tables,
            client_id: self.client_id,
            client_email: self.client_email,
        }
    }
}
