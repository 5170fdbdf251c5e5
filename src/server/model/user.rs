//! User domain model.
//!
//! Users are provisioned by the external identity provider; this backend only reads them
//! to resolve the session and decide staff access.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Authenticated application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Staff users may create inventory, routes and flights.
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            is_staff: entity.is_staff,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            is_staff: self.is_staff,
        }
    }
}
