//! Queries for the `restaurants` table.

use mesa_core::restaurant::NewRestaurant;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::restaurant::RestaurantRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, street, number, additional_details, neighborhood, \
    city, state, opening_hours, cuisines, tables, created_at, updated_at";

pub struct RestaurantRepo;

impl RestaurantRepo {
    /// Insert a draft restaurant, returning the created row with its
    /// storage-assigned identity. A name collision fails on the
    /// `uq_restaurants_name` constraint.
    pub async fn insert(pool: &PgPool, draft: &NewRestaurant) -> Result<RestaurantRow, sqlx::Error> {
        let opening_hours = serde_json::to_value(&draft.opening_hours)
            .map_err(|err| sqlx::Error::Encode(Box::new(err)))?;
        let cuisines: Vec<String> = draft
            .cuisines
            .iter()
            .map(|c| c.as_str().to_string())
            .collect();

        let query = format!(
            "INSERT INTO restaurants
                (name, street, number, additional_details, neighborhood, city,
                 state, opening_hours, cuisines, tables)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RestaurantRow>(&query)
            .bind(&draft.name)
            .bind(&draft.address.street)
            .bind(draft.address.number)
            .bind(&draft.address.additional_details)
            .bind(&draft.address.neighborhood)
            .bind(&draft.address.city)
            .bind(draft.address.state.as_str())
            .bind(opening_hours)
            .bind(cuisines)
            .bind(draft.tables)
            .fetch_one(pool)
            .await
    }

    /// Case-sensitive existence check on the exact name.
    pub async fn exists_name(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM restaurants WHERE name = $1)")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<RestaurantRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1");
        sqlx::query_as::<_, RestaurantRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Filtered listing, ordered by name.
    ///
    /// Absent filters are ignored. `name` and `location` are ILIKE
    /// substring matches (`location` against city or neighborhood);
    /// `cuisines` uses array overlap, so one shared cuisine is enough.
    pub async fn find_all_by(
        pool: &PgPool,
        name: Option<&str>,
        location: Option<&str>,
        cuisines: Option<Vec<String>>,
    ) -> Result<Vec<RestaurantRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM restaurants
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::text IS NULL
                    OR city ILIKE '%' || $2 || '%'
                    OR neighborhood ILIKE '%' || $2 || '%')
               AND ($3::text[] IS NULL OR cuisines && $3)
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, RestaurantRow>(&query)
            .bind(name)
            .bind(location)
            .bind(cuisines)
            .fetch_all(pool)
            .await
    }
}
