//! Airport factory for creating test airport entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airports with customizable fields.
pub struct AirportFactory<'a> {
    db: &'a DatabaseConnection,
    closest_big_city_id: i32,
    name: String,
    iata_code: Option<String>,
    timezone: String,
}

impl<'a> AirportFactory<'a> {
    /// Creates a new AirportFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Airport {id}"`
    /// - iata_code: `None`
    /// - timezone: `"UTC"`
    pub fn new(db: &'a DatabaseConnection, closest_big_city_id: i32) -> Self {
        Self {
            db,
            closest_big_city_id,
            name: format!("Airport {}", next_id()),
            iata_code: None,
            timezone: "UTC".to_string(),
        }
    }

    /// Sets the airport name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the IATA code.
    pub fn iata_code(mut self, iata_code: impl Into<String>) -> Self {
        self.iata_code = Some(iata_code.into());
        self
    }

    /// Sets the IANA time zone name.
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Builds and inserts the airport entity into the database.
    pub async fn build(self) -> Result<entity::airport::Model, DbErr> {
        entity::airport::ActiveModel {
            name: ActiveValue::Set(self.name),
            closest_big_city_id: ActiveValue::Set(self.closest_big_city_id),
            iata_code: ActiveValue::Set(self.iata_code),
            timezone: ActiveValue::Set(self.timezone),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airport in a freshly created country and city.
pub async fn create_airport(db: &DatabaseConnection) -> Result<entity::airport::Model, DbErr> {
    let country = crate::factory::location::create_country(db).await?;
    let city = crate::factory::location::create_city(db, country.id).await?;

    AirportFactory::new(db, city.id).build().await
}
