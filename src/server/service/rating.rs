//! Airline ratings: staff record them, authenticated users browse them by airline name.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{airline::AirlineRepository, rating::RatingRepository},
    error::AppError,
    model::{
        filter::{page_offset, total_pages, TextFilter},
        rating::{AirlineRating, CreateAirlineRatingParams, PaginatedAirlineRatings},
    },
};

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a rating for an existing airline.
    ///
    /// Scores are range-checked when the params are built.
    ///
    /// # Returns
    /// - `Ok(AirlineRating)` - Created rating
    /// - `Err(AppError::NotFound)` - Airline does not exist
    pub async fn create(
        &self,
        params: CreateAirlineRatingParams,
    ) -> Result<AirlineRating, AppError> {
        let Some(airline) = AirlineRepository::new(self.db)
            .find_by_id(params.airline_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Airline {} not found",
                params.airline_id
            )));
        };

        let rating = RatingRepository::new(self.db)
            .create(params, airline.name)
            .await?;

        tracing::info!("Airline {} rated (rating {})", rating.airline_id, rating.id);

        Ok(rating)
    }

    /// Lists ratings of airlines whose name contains `airline_name`, newest first.
    ///
    /// # Returns
    /// - `Ok(PaginatedAirlineRatings)` - The requested page, possibly empty
    /// - `Err(AppError::BadRequest)` - No airline name given, or `page × per_page` is
    ///   out of range
    pub async fn list(
        &self,
        airline_name: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAirlineRatings, AppError> {
        let filter = TextFilter::new(airline_name);
        if !filter.is_active() {
            return Err(AppError::BadRequest(
                "Query parameter 'airline_name' is required".to_string(),
            ));
        }
        page_offset(page, per_page)?;

        let airlines: HashMap<i32, String> = AirlineRepository::new(self.db)
            .get_names()
            .await?
            .into_iter()
            .filter(|(_, name)| filter.matches(name))
            .collect();

        let (ratings, total) = RatingRepository::new(self.db)
            .get_by_airlines_paginated(&airlines, page, per_page)
            .await?;

        Ok(PaginatedAirlineRatings {
            ratings,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
