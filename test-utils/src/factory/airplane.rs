//! Airplane and airplane type factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an airplane type named `"Type {id}"`.
pub async fn create_airplane_type(
    db: &DatabaseConnection,
) -> Result<entity::airplane_type::Model, DbErr> {
    entity::airplane_type::ActiveModel {
        name: ActiveValue::Set(format!("Type {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating test airplanes with customizable seat grids.
///
/// # Example
///
/// ```rust,ignore
/// let airplane = AirplaneFactory::new(&db, airplane_type.id)
///     .rows(3)
///     .seats_per_row(4)
///     .build()
///     .await?;
/// ```
pub struct AirplaneFactory<'a> {
    db: &'a DatabaseConnection,
    airplane_type_id: i32,
    airline_id: Option<i32>,
    name: String,
    rows: i32,
    seats_per_row: i32,
}

impl<'a> AirplaneFactory<'a> {
    /// Creates a new AirplaneFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Airplane {id}"`
    /// - rows: `20`
    /// - seats_per_row: `6`
    /// - airline_id: `None`
    pub fn new(db: &'a DatabaseConnection, airplane_type_id: i32) -> Self {
        Self {
            db,
            airplane_type_id,
            airline_id: None,
            name: format!("Airplane {}", next_id()),
            rows: 20,
            seats_per_row: 6,
        }
    }

    /// Sets the airplane name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the number of rows.
    pub fn rows(mut self, rows: i32) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the number of seats in each row.
    pub fn seats_per_row(mut self, seats_per_row: i32) -> Self {
        self.seats_per_row = seats_per_row;
        self
    }

    /// Sets the operating airline.
    pub fn airline_id(mut self, airline_id: i32) -> Self {
        self.airline_id = Some(airline_id);
        self
    }

    /// Builds and inserts the airplane entity into the database.
    pub async fn build(self) -> Result<entity::airplane::Model, DbErr> {
        entity::airplane::ActiveModel {
            name: ActiveValue::Set(self.name),
            rows: ActiveValue::Set(self.rows),
            seats_per_row: ActiveValue::Set(self.seats_per_row),
            airplane_type_id: ActiveValue::Set(self.airplane_type_id),
            airline_id: ActiveValue::Set(self.airline_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airplane of the given type with default values.
pub async fn create_airplane(
    db: &DatabaseConnection,
    airplane_type_id: i32,
) -> Result<entity::airplane::Model, DbErr> {
    AirplaneFactory::new(db, airplane_type_id).build().await
}
