//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models where related rows must be joined in. Repositories that take part in
//! multi-statement writes are generic over `ConnectionTrait` so they can run on either a
//! `DatabaseConnection` or a `DatabaseTransaction`.

pub mod airline;
pub mod airplane;
pub mod airport;
pub mod crew;
pub mod flight;
pub mod location;
pub mod order;
pub mod rating;
pub mod route;
pub mod ticket;
pub mod user;
