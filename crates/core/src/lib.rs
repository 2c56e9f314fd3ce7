//! Domain core for the restaurant and reservation backend.
//!
//! Holds the entity model, the storage ports consumed by the use cases,
//! the use cases themselves, and the error taxonomy. No HTTP or database
//! types appear here; adapters live in `mesa-db` and `mesa-api`.

pub mod cuisine;
pub mod error;
pub mod messages;
pub mod reservation;
pub mod restaurant;
pub mod state;
pub mod types;
