//! Request and response DTOs for the web boundary.
//!
//! Request fields are all optional at the serde level so that a missing or
//! null field surfaces as the API's own `field: message` validation error
//! instead of a deserialization failure. `into_draft` is the explicit
//! validation pass that turns a raw request into a domain draft.

use chrono::NaiveTime;
use mesa_core::cuisine::Cuisine;
use mesa_core::error::CoreError;
use mesa_core::messages;
use mesa_core::reservation::Reservation;
use mesa_core::restaurant::{Address, DayOfWeek, NewRestaurant, OpeningHours, Restaurant};
use mesa_core::state::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRequest {
    pub name: Option<String>,
    pub address: Option<AddressRequest>,
    pub tables: Option<i32>,
    pub opening_hours: Option<Vec<OpeningHoursRequest>>,
    pub cuisines: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct AddressRequest {
    pub street: Option<String>,
    pub number: Option<i32>,
    // Wire name kept for compatibility with existing clients.
    #[serde(rename = "addittionalDetails")]
    pub additional_details: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursRequest {
    pub day_of_week: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

fn field_error(field: &str, message: &str) -> CoreError {
    CoreError::Validation(format!("{field}: {message}"))
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| field_error(field, messages::FIELD_REQUIRED))
}

/// Accept `HH:MM:SS` and the shorter `HH:MM` clients commonly send.
fn parse_time(field: &str, raw: &str) -> Result<NaiveTime, CoreError> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| field_error(field, messages::INVALID_TIME))
}

impl RestaurantRequest {
    /// Validate presence and formats, producing a domain draft.
    ///
    /// Value constraints (lengths, ranges, schedule ordering) are the
    /// registration use case's concern; this pass only rejects what the
    /// domain types cannot even represent.
    pub fn into_draft(self) -> Result<NewRestaurant, CoreError> {
        let name = required("name", self.name)?;
        let address = required("address", self.address)?.into_domain()?;
        let tables = required("tables", self.tables)?;

        let opening_hours = required("openingHours", self.opening_hours)?
            .into_iter()
            .map(OpeningHoursRequest::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        let cuisines = required("cuisines", self.cuisines)?
            .iter()
            .map(|raw| {
                Cuisine::from_name(raw)
                    .ok_or_else(|| field_error("cuisines", messages::INVALID_CUISINE))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewRestaurant {
            name,
            address,
            tables,
            opening_hours,
            cuisines,
        })
    }
}

impl AddressRequest {
    fn into_domain(self) -> Result<Address, CoreError> {
        let street = required("address.street", self.street)?;
        let number = required("address.number", self.number)?;
        let neighborhood = required("address.neighborhood", self.neighborhood)?;
        let city = required("address.city", self.city)?;
        let state_raw = required("address.state", self.state)?;
        let state = State::from_code(&state_raw)
            .ok_or_else(|| field_error("address.state", messages::INVALID_STATE))?;

        Ok(Address {
            street,
            number,
            additional_details: self.additional_details,
            neighborhood,
            city,
            state,
        })
    }
}

impl OpeningHoursRequest {
    fn into_domain(self) -> Result<OpeningHours, CoreError> {
        let day_raw = required("openingHours.dayOfWeek", self.day_of_week)?;
        let day_of_week = DayOfWeek::from_name(&day_raw)
            .ok_or_else(|| field_error("openingHours.dayOfWeek", messages::INVALID_DAY_OF_WEEK))?;
        let start = parse_time("openingHours.start", &required("openingHours.start", self.start)?)?;
        let end = parse_time("openingHours.end", &required("openingHours.end", self.end)?)?;

        Ok(OpeningHours {
            day_of_week,
            start,
            end,
        })
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: Uuid,
    pub name: String,
    pub address: AddressResponse,
    pub tables: i32,
    pub opening_hours: Vec<OpeningHours>,
    pub cuisines: Vec<Cuisine>,
}

#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub street: String,
    pub number: i32,
    #[serde(rename = "addittionalDetails")]
    pub additional_details: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: State,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: AddressResponse {
                street: restaurant.address.street,
                number: restaurant.address.number,
                additional_details: restaurant.address.additional_details,
                neighborhood: restaurant.address.neighborhood,
                city: restaurant.address.city,
                state: restaurant.address.state,
            },
            tables: restaurant.tables,
            opening_hours: restaurant.opening_hours,
            cuisines: restaurant.cuisines,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: Uuid,
    pub code: String,
    pub service: ReservationServiceResponse,
    pub tables: i32,
    pub client_id: Uuid,
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationServiceResponse {
    pub restaurant_id: Uuid,
    pub restaurant_name: String,
    pub date: chrono::NaiveDate,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            reservation_id: reservation.id,
            code: reservation.code,
            service: ReservationServiceResponse {
                restaurant_id: reservation.service.restaurant_id,
                restaurant_name: reservation.service.restaurant_name,
                date: reservation.service.date,
            },
            tables: reservation.tables,
            client_id: reservation.client_id,
            email: reservation.client_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> RestaurantRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Taverna",
            "address": {
                "street": "Rua das Laranjeiras",
                "number": 123,
                "addittionalDetails": "Loja 2",
                "neighborhood": "Centro",
                "city": "São Paulo",
                "state": "SP"
            },
            "tables": 10,
            "openingHours": [
                {"dayOfWeek": "MONDAY", "start": "11:00", "end": "23:00:00"}
            ],
            "cuisines": ["BRAZILIAN"]
        }))
        .unwrap()
    }

    #[test]
    fn into_draft_accepts_a_full_request() {
        let draft = full_request().into_draft().unwrap();
        assert_eq!(draft.name, "Taverna");
        assert_eq!(draft.address.state, State::SP);
        assert_eq!(draft.address.additional_details.as_deref(), Some("Loja 2"));
        assert_eq!(draft.opening_hours[0].day_of_week, DayOfWeek::Monday);
        assert_eq!(draft.cuisines, vec![Cuisine::Brazilian]);
    }

    #[test]
    fn missing_name_is_reported_with_field_prefix() {
        let mut request = full_request();
        request.name = None;
        let err = request.into_draft().unwrap_err();
        assert!(
            matches!(err, CoreError::Validation(msg) if msg == "name: O campo deve estar preenchido")
        );
    }

    #[test]
    fn unknown_state_and_cuisine_are_rejected() {
        let mut request = full_request();
        request.address.as_mut().unwrap().state = Some("XX".into());
        let err = request.into_draft().unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.starts_with("address.state:")));

        let mut request = full_request();
        request.cuisines = Some(vec!["KLINGON".into()]);
        let err = request.into_draft().unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.starts_with("cuisines:")));
    }

    #[test]
    fn bad_time_format_is_rejected() {
        let mut request = full_request();
        request.opening_hours.as_mut().unwrap()[0].start = Some("onze horas".into());
        let err = request.into_draft().unwrap_err();
        assert!(
            matches!(err, CoreError::Validation(msg) if msg.starts_with("openingHours.start:"))
        );
    }
}
