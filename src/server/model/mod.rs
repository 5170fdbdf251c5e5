//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod airplane;
pub mod filter;
pub mod flight;
pub mod inventory;
pub mod order;
pub mod rating;
pub mod route;
pub mod user;
