//! Restaurant entity model, validation, storage port, and use cases.

use async_trait::async_trait;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cuisine::Cuisine;
use crate::error::CoreError;
use crate::messages;
use crate::state::State;
use crate::types::Timestamp;

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 100;
pub const STREET_MIN: usize = 10;
pub const STREET_MAX: usize = 150;
pub const ADDITIONAL_DETAILS_MAX: usize = 150;
pub const NEIGHBORHOOD_MIN: usize = 3;
pub const NEIGHBORHOOD_MAX: usize = 30;
pub const CITY_MIN: usize = 3;
pub const CITY_MAX: usize = 60;

// ---------------------------------------------------------------------------
// Entity model
// ---------------------------------------------------------------------------

/// A restaurant as known to storage, identity assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub address: Address,
    pub tables: i32,
    pub opening_hours: Vec<OpeningHours>,
    pub cuisines: Vec<Cuisine>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A draft restaurant, before identity assignment by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: Address,
    pub tables: i32,
    pub opening_hours: Vec<OpeningHours>,
    pub cuisines: Vec<Cuisine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: i32,
    pub additional_details: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: State,
}

/// One weekly opening-hours entry. `start` must precede `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub day_of_week: DayOfWeek,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }

    /// Parse the wire representation. Returns `None` outside the set.
    pub fn from_name(name: &str) -> Option<DayOfWeek> {
        DayOfWeek::ALL.iter().copied().find(|d| d.as_str() == name)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn field_error(field: &str, message: &str) -> CoreError {
    CoreError::Validation(format!("{field}: {message}"))
}

/// Validate a draft restaurant, field by field. The first violation wins,
/// since the error envelope carries a single message.
pub fn validate_draft(draft: &NewRestaurant) -> Result<(), CoreError> {
    validate_name(&draft.name)?;
    validate_address(&draft.address)?;
    validate_tables(draft.tables)?;
    validate_opening_hours(&draft.opening_hours)?;
    validate_cuisines(&draft.cuisines)?;
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(field_error("name", messages::FIELD_REQUIRED));
    }
    let len = name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&len) {
        return Err(field_error(
            "name",
            &messages::length_between(NAME_MIN, NAME_MAX),
        ));
    }
    Ok(())
}

pub fn validate_address(address: &Address) -> Result<(), CoreError> {
    if address.street.trim().is_empty() {
        return Err(field_error("address.street", messages::FIELD_REQUIRED));
    }
    let street_len = address.street.chars().count();
    if !(STREET_MIN..=STREET_MAX).contains(&street_len) {
        return Err(field_error(
            "address.street",
            &messages::length_between(STREET_MIN, STREET_MAX),
        ));
    }
    if address.number < 1 {
        return Err(field_error("address.number", messages::GREATER_THAN_ZERO));
    }
    if let Some(details) = &address.additional_details {
        if details.chars().count() > ADDITIONAL_DETAILS_MAX {
            return Err(field_error(
                "address.addittionalDetails",
                &messages::length_at_most(ADDITIONAL_DETAILS_MAX),
            ));
        }
    }
    let neighborhood_len = address.neighborhood.chars().count();
    if !(NEIGHBORHOOD_MIN..=NEIGHBORHOOD_MAX).contains(&neighborhood_len) {
        return Err(field_error(
            "address.neighborhood",
            &messages::length_between(NEIGHBORHOOD_MIN, NEIGHBORHOOD_MAX),
        ));
    }
    let city_len = address.city.chars().count();
    if !(CITY_MIN..=CITY_MAX).contains(&city_len) {
        return Err(field_error(
            "address.city",
            &messages::length_between(CITY_MIN, CITY_MAX),
        ));
    }
    Ok(())
}

pub fn validate_tables(tables: i32) -> Result<(), CoreError> {
    if tables < 1 {
        return Err(field_error("tables", messages::GREATER_THAN_ZERO));
    }
    Ok(())
}

pub fn validate_opening_hours(hours: &[OpeningHours]) -> Result<(), CoreError> {
    if hours.is_empty() {
        return Err(field_error("openingHours", messages::FIELD_REQUIRED));
    }
    for entry in hours {
        if entry.start >= entry.end {
            return Err(field_error(
                "openingHours",
                messages::OPENING_BEFORE_CLOSING,
            ));
        }
    }
    Ok(())
}

pub fn validate_cuisines(cuisines: &[Cuisine]) -> Result<(), CoreError> {
    if cuisines.is_empty() {
        return Err(field_error("cuisines", messages::FIELD_REQUIRED));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Storage port
// ---------------------------------------------------------------------------

/// Storage contract for restaurants, implemented by the persistence adapter.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    async fn exists_name(&self, name: &str) -> Result<bool, CoreError>;

    /// Persist a draft, assigning identity. A name collision must surface
    /// as [`CoreError::Conflict`] with [`messages::DUPLICATE_NAME`]; the
    /// storage unique constraint is the authoritative duplicate signal.
    async fn save(&self, draft: &NewRestaurant) -> Result<Restaurant, CoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, CoreError>;

    /// Filtered listing. `name` and `location` are case-insensitive
    /// substring matches (`location` against city or neighborhood);
    /// `cuisines` matches restaurants offering at least one of the given
    /// cuisines. Present filters combine with AND.
    async fn find_all_by(
        &self,
        name: Option<&str>,
        location: Option<&str>,
        cuisines: Option<&[Cuisine]>,
    ) -> Result<Vec<Restaurant>, CoreError>;
}

// ---------------------------------------------------------------------------
// Use cases
// ---------------------------------------------------------------------------

/// Application-layer operations over the restaurant store.
pub struct RestaurantService<S> {
    store: S,
}

impl<S: RestaurantStore> RestaurantService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new restaurant, returning the assigned identity.
    ///
    /// The `exists_name` call is a fast-path check only. A concurrent
    /// registration that slips past it still fails inside `save` on the
    /// storage unique constraint, with the same `Conflict` error, so
    /// storage is never left with two restaurants sharing a name.
    pub async fn create(&self, draft: &NewRestaurant) -> Result<Uuid, CoreError> {
        validate_draft(draft)?;
        if self.store.exists_name(&draft.name).await? {
            return Err(CoreError::Conflict(messages::DUPLICATE_NAME.into()));
        }
        let restaurant = self.store.save(draft).await?;
        Ok(restaurant.id)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Restaurant, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(messages::RESTAURANT_NOT_FOUND.into()))
    }

    /// Filtered listing; an empty result is reported as `NotFound`.
    pub async fn find_all_by(
        &self,
        name: Option<&str>,
        location: Option<&str>,
        cuisines: Option<&[Cuisine]>,
    ) -> Result<Vec<Restaurant>, CoreError> {
        let found = self.store.find_all_by(name, location, cuisines).await?;
        if found.is_empty() {
            return Err(CoreError::NotFound(messages::RESTAURANT_NOT_FOUND.into()));
        }
        Ok(found)
    }
}
