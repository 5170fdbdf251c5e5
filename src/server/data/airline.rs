//! Airline repository.
//!
//! Airlines are returned with their fleet size and rating summary, each resolved for
//! the whole batch in one query.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{airplane::AirplaneRepository, rating::RatingRepository},
    model::{
        inventory::{Airline, CreateAirlineParams},
        rating::RatingSummary,
    },
};

pub struct AirlineRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirlineRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an airline. A new airline has no fleet and no ratings.
    pub async fn create(&self, params: CreateAirlineParams) -> Result<Airline, DbErr> {
        let entity = entity::airline::ActiveModel {
            name: ActiveValue::Set(params.name),
            headquarters: ActiveValue::Set(params.headquarters),
            iata_code: ActiveValue::Set(params.iata_code),
            web_site_address: ActiveValue::Set(params.web_site_address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Airline::from_entity(entity, 0, RatingSummary::default()))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Airline>, DbErr> {
        let Some(entity) = entity::prelude::Airline::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.resolve(vec![entity]).await?.pop())
    }

    pub async fn iata_code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let entity = entity::prelude::Airline::find()
            .filter(entity::airline::Column::IataCode.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    pub async fn get_all(&self) -> Result<Vec<Airline>, DbErr> {
        let entities = entity::prelude::Airline::find()
            .order_by_asc(entity::airline::Column::Name)
            .all(self.db)
            .await?;

        self.resolve(entities).await
    }

    /// Gets the ID and name of every airline, without fleet or ratings.
    pub async fn get_names(&self) -> Result<Vec<(i32, String)>, DbErr> {
        let entities = entity::prelude::Airline::find()
            .order_by_asc(entity::airline::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|a| (a.id, a.name)).collect())
    }

    async fn resolve(&self, airlines: Vec<entity::airline::Model>) -> Result<Vec<Airline>, DbErr> {
        let ids: Vec<i32> = airlines.iter().map(|a| a.id).collect();

        let fleet_sizes = AirplaneRepository::new(self.db)
            .count_by_airlines(ids.clone())
            .await?;
        let mut scores = RatingRepository::new(self.db).scores_by_airlines(ids).await?;

        Ok(airlines
            .into_iter()
            .map(|airline| {
                let fleet_size = fleet_sizes.get(&airline.id).copied().unwrap_or(0);
                let rating = scores
                    .remove(&airline.id)
                    .map(|s| RatingSummary::from_scores(&s))
                    .unwrap_or_default();
                Airline::from_entity(airline, fleet_size, rating)
            })
            .collect())
    }
}
