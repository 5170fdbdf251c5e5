//! Wire DTOs shared by the HTTP API.

pub mod api;
pub mod flight;
pub mod inventory;
pub mod order;
pub mod rating;
pub mod route;
pub mod user;
