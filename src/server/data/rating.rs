//! Airline rating repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::rating::{AirlineRating, CreateAirlineRatingParams, RatingScores};

pub struct RatingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a rating stamped with the current time.
    ///
    /// The caller resolves the airline first and passes its name through.
    pub async fn create(
        &self,
        params: CreateAirlineRatingParams,
        airline_name: String,
    ) -> Result<AirlineRating, DbErr> {
        let entity = entity::airline_rating::ActiveModel {
            airline_id: ActiveValue::Set(params.airline_id),
            boarding_deplaining: ActiveValue::Set(params.scores.boarding_deplaining),
            crew: ActiveValue::Set(params.scores.crew),
            services: ActiveValue::Set(params.scores.services),
            entertainment: ActiveValue::Set(params.scores.entertainment),
            wi_fi: ActiveValue::Set(params.scores.wi_fi),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AirlineRating::from_entity(entity, airline_name))
    }

    /// Gets the scores of every rating of each airline, keyed by airline ID.
    ///
    /// Airlines without ratings are absent from the map.
    pub async fn scores_by_airlines(
        &self,
        airline_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<RatingScores>>, DbErr> {
        if airline_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ratings = entity::prelude::AirlineRating::find()
            .filter(entity::airline_rating::Column::AirlineId.is_in(airline_ids))
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<RatingScores>> = HashMap::new();
        for rating in ratings {
            grouped
                .entry(rating.airline_id)
                .or_default()
                .push(RatingScores::from_entity(&rating));
        }

        Ok(grouped)
    }

    /// Gets one page of the ratings of the given airlines, newest first.
    ///
    /// # Arguments
    /// - `airline_names` - Airline ID to name for every airline whose ratings to include
    ///
    /// # Returns
    /// - `Ok((ratings, total))` - The page and the total number of matching ratings
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_airlines_paginated(
        &self,
        airline_names: &HashMap<i32, String>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<AirlineRating>, u64), DbErr> {
        if airline_names.is_empty() {
            return Ok((Vec::new(), 0));
        }

        let paginator = entity::prelude::AirlineRating::find()
            .filter(
                entity::airline_rating::Column::AirlineId
                    .is_in(airline_names.keys().copied().collect::<Vec<_>>()),
            )
            .order_by_desc(entity::airline_rating::Column::CreatedAt)
            .order_by_desc(entity::airline_rating::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let ratings = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|rating| {
                let name = airline_names
                    .get(&rating.airline_id)
                    .cloned()
                    .unwrap_or_default();
                AirlineRating::from_entity(rating, name)
            })
            .collect();

        Ok((ratings, total))
    }
}
