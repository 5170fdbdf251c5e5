//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing validation and booking rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Opening and committing transactions for multi-row writes

pub mod booking;
pub mod flight;
pub mod inventory;
pub mod rating;
pub mod route;

#[cfg(test)]
mod test;
