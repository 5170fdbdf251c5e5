//! Country and city factories.

use crate::factory::helpers::next_id;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Creates a country with a unique default name.
pub async fn create_country(db: &DatabaseConnection) -> Result<entity::country::Model, DbErr> {
    entity::country::ActiveModel {
        name: ActiveValue::Set(format!("Country {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Returns the country with the given name, inserting it when missing.
pub async fn find_or_create_country(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::country::Model, DbErr> {
    if let Some(country) = entity::prelude::Country::find()
        .filter(entity::country::Column::Name.eq(name))
        .one(db)
        .await?
    {
        return Ok(country);
    }

    entity::country::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating test cities.
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    country_id: i32,
    name: String,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with default name `"City {id}"`.
    pub fn new(db: &'a DatabaseConnection, country_id: i32) -> Self {
        Self {
            db,
            country_id,
            name: format!("City {}", next_id()),
        }
    }

    /// Sets the city name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the city entity into the database.
    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            name: ActiveValue::Set(self.name),
            country_id: ActiveValue::Set(self.country_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city in the given country with default values.
pub async fn create_city(
    db: &DatabaseConnection,
    country_id: i32,
) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db, country_id).build().await
}
