//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs to params, call a service and
//! convert the domain result back to a DTO.

use serde::Deserialize;

pub mod auth;
pub mod flight;
pub mod inventory;
pub mod order;
pub mod rating;
pub mod route;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
