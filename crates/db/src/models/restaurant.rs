//! Restaurant row model and domain conversion.

use mesa_core::cuisine::Cuisine;
use mesa_core::error::CoreError;
use mesa_core::restaurant::{Address, OpeningHours, Restaurant};
use mesa_core::state::State;
use mesa_core::types::Timestamp;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `restaurants` table.
#[derive(Debug, Clone, FromRow)]
pub struct RestaurantRow {
    pub id: Uuid,
    pub name: String,
    pub street: String,
    pub number: i32,
    pub additional_details: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub opening_hours: serde_json::Value,
    pub cuisines: Vec<String>,
    pub tables: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RestaurantRow {
    /// Convert a stored row into the domain entity.
    ///
    /// State, cuisines, and opening hours are persisted as text/JSONB; a
    /// stored value outside the current closed sets means the row is
    /// corrupt and is reported as an internal error.
    pub fn into_domain(self) -> Result<Restaurant, CoreError> {
        let state = State::from_code(&self.state).ok_or_else(|| {
            CoreError::Internal(format!(
                "restaurant {}: unknown state '{}'",
                self.id, self.state
            ))
        })?;

        let cuisines = self
            .cuisines
            .iter()
            .map(|name| {
                Cuisine::from_name(name).ok_or_else(|| {
                    CoreError::Internal(format!(
                        "restaurant {}: unknown cuisine '{name}'",
                        self.id
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let opening_hours: Vec<OpeningHours> =
            serde_json::from_value(self.opening_hours).map_err(|err| {
                CoreError::Internal(format!("restaurant {}: bad opening hours: {err}", self.id))
            })?;

        Ok(Restaurant {
            id: self.id,
            name: self.name,
            address: Address {
                street: self.street,
                number: self.number,
                additional_details: self.additional_details,
                neighborhood: self.neighborhood,
                city: self.city,
                state,
            },
            tables: self.tables,
            opening_hours,
            cuisines,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
