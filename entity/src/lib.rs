//! SeaORM entity definitions for the airport database schema.
//!
//! One module per table. Relations are declared on the owning side (`belongs_to`)
//! with `has_many` counterparts where the application navigates in that direction.

pub mod prelude;

pub mod airline;
pub mod airline_rating;
pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod city;
pub mod country;
pub mod crew;
pub mod flight;
pub mod flight_crew;
pub mod order;
pub mod route;
pub mod ticket;
pub mod user;
