//! Row structs matching the database schema.
//!
//! Each submodule contains a `FromRow` struct plus its conversion into the
//! domain entity from `mesa-core`. Enum-valued and schedule columns are
//! persisted as text/JSONB, so the conversions are fallible.

pub mod reservation;
pub mod restaurant;
