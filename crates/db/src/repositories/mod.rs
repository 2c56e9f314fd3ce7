//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod reservation_repo;
pub mod restaurant_repo;

pub use reservation_repo::ReservationRepo;
pub use restaurant_repo::RestaurantRepo;
