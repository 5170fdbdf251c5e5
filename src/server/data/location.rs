//! Country and city repositories.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::inventory::{City, Country, CreateCityParams, CreateCountryParams};

pub struct CountryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCountryParams) -> Result<Country, DbErr> {
        let entity = entity::country::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Country::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Country>, DbErr> {
        let entity = entity::prelude::Country::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Country::from_entity))
    }

    /// Checks whether a country with exactly this name exists.
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let entity = entity::prelude::Country::find()
            .filter(entity::country::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Gets all countries ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Country>, DbErr> {
        let entities = entity::prelude::Country::find()
            .order_by_asc(entity::country::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Country::from_entity).collect())
    }
}

pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a city and returns it with its country name.
    ///
    /// The caller is expected to have checked that the country exists.
    pub async fn create(&self, params: CreateCityParams) -> Result<City, DbErr> {
        let entity = entity::city::ActiveModel {
            name: ActiveValue::Set(params.name),
            country_id: ActiveValue::Set(params.country_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let country = entity::prelude::Country::find_by_id(entity.country_id)
            .one(self.db)
            .await?;

        Ok(City::from_entity(entity, country))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<City>, DbErr> {
        let result = entity::prelude::City::find_by_id(id)
            .find_also_related(entity::prelude::Country)
            .one(self.db)
            .await?;

        Ok(result.map(|(city, country)| City::from_entity(city, country)))
    }

    /// Gets all cities with their country, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<City>, DbErr> {
        let results = entity::prelude::City::find()
            .find_also_related(entity::prelude::Country)
            .order_by_asc(entity::city::Column::Name)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(city, country)| City::from_entity(city, country))
            .collect())
    }
}
