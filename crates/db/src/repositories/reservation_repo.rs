//! Read-only queries for the `reservations` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::reservation::ReservationRow;

/// Joined column list: every projection embeds the restaurant summary.
const COLUMNS: &str = "r.id, r.code, r.restaurant_id, rest.name AS restaurant_name, \
    r.service_date, r.tables, r.client_id, r.client_email";

pub struct ReservationRepo;

impl ReservationRepo {
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ReservationRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations r
             JOIN restaurants rest ON rest.id = r.restaurant_id
             WHERE r.id = $1"
        );
        sqlx::query_as::<_, ReservationRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All reservations of one restaurant, earliest service date first.
    pub async fn list_by_restaurant(
        pool: &PgPool,
        restaurant_id: Uuid,
    ) -> Result<Vec<ReservationRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations r
             JOIN restaurants rest ON rest.id = r.restaurant_id
             WHERE r.restaurant_id = $1
             ORDER BY r.service_date ASC, r.code ASC"
        );
        sqlx::query_as::<_, ReservationRow>(&query)
            .bind(restaurant_id)
            .fetch_all(pool)
            .await
    }
}
