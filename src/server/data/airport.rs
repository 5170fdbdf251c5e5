//! Airport repository.
//!
//! Airports are always returned with their closest city and that city's country
//! resolved, since route and flight filters match against those names.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::inventory::{Airport, CreateAirportParams};

pub struct AirportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an airport.
    ///
    /// The caller is expected to have checked that the city exists and the IATA code is
    /// free; the unique index on `iata_code` still rejects a racing duplicate.
    pub async fn create(&self, params: CreateAirportParams) -> Result<Airport, DbErr> {
        let entity = entity::airport::ActiveModel {
            name: ActiveValue::Set(params.name),
            closest_big_city_id: ActiveValue::Set(params.closest_big_city_id),
            iata_code: ActiveValue::Set(params.iata_code),
            timezone: ActiveValue::Set(params.timezone),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut airports = self.resolve(vec![entity]).await?;

        airports.pop().ok_or_else(|| {
            DbErr::RecordNotFound("Airport not found after creation".to_string())
        })
    }

    /// Finds an airport by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Airport))` - Airport with city and country names
    /// - `Ok(None)` - No airport with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Airport>, DbErr> {
        let Some(entity) = entity::prelude::Airport::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.resolve(vec![entity]).await?.pop())
    }

    /// Checks whether an airport already uses the given IATA code.
    pub async fn iata_code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let entity = entity::prelude::Airport::find()
            .filter(entity::airport::Column::IataCode.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Gets all airports ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Airport>, DbErr> {
        let entities = entity::prelude::Airport::find()
            .order_by_asc(entity::airport::Column::Name)
            .all(self.db)
            .await?;

        self.resolve(entities).await
    }

    /// Gets the airports with the given IDs, keyed by ID.
    ///
    /// Unknown IDs are absent from the map.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Airport>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Airport::find()
            .filter(entity::airport::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(self
            .resolve(entities)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect())
    }

    /// Loads cities and countries for a batch of airports in two queries.
    async fn resolve(&self, airports: Vec<entity::airport::Model>) -> Result<Vec<Airport>, DbErr> {
        let city_ids: Vec<i32> = airports.iter().map(|a| a.closest_big_city_id).collect();

        let cities: HashMap<i32, entity::city::Model> = if city_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::City::find()
                .filter(entity::city::Column::Id.is_in(city_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let country_ids: Vec<i32> = cities.values().map(|c| c.country_id).collect();

        let countries: HashMap<i32, entity::country::Model> = if country_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Country::find()
                .filter(entity::country::Column::Id.is_in(country_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        Ok(airports
            .into_iter()
            .map(|airport| {
                let city = cities.get(&airport.closest_big_city_id);
                let country = city.and_then(|c| countries.get(&c.country_id));
                Airport::from_entity(airport, city, country)
            })
            .collect())
    }
}
