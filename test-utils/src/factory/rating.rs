//! Airline rating factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating airline ratings. Every category starts unset.
///
/// # Example
///
/// ```rust,ignore
/// let rating = RatingFactory::new(&db, airline.id).crew(5).wi_fi(2).build().await?;
/// ```
pub struct RatingFactory<'a> {
    db: &'a DatabaseConnection,
    airline_id: i32,
    boarding_deplaining: Option<i32>,
    crew: Option<i32>,
    services: Option<i32>,
    entertainment: Option<i32>,
    wi_fi: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> RatingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, airline_id: i32) -> Self {
        Self {
            db,
            airline_id,
            boarding_deplaining: None,
            crew: None,
            services: None,
            entertainment: None,
            wi_fi: None,
            created_at: Utc::now(),
        }
    }

    pub fn boarding_deplaining(mut self, score: i32) -> Self {
        self.boarding_deplaining = Some(score);
        self
    }

    pub fn crew(mut self, score: i32) -> Self {
        self.crew = Some(score);
        self
    }

    pub fn services(mut self, score: i32) -> Self {
        self.services = Some(score);
        self
    }

    pub fn entertainment(mut self, score: i32) -> Self {
        self.entertainment = Some(score);
        self
    }

    pub fn wi_fi(mut self, score: i32) -> Self {
        self.wi_fi = Some(score);
        self
    }

    /// Sets the creation time, which orders rating listings.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the rating entity into the database.
    pub async fn build(self) -> Result<entity::airline_rating::Model, DbErr> {
        entity::airline_rating::ActiveModel {
            airline_id: ActiveValue::Set(self.airline_id),
            boarding_deplaining: ActiveValue::Set(self.boarding_deplaining),
            crew: ActiveValue::Set(self.crew),
            services: ActiveValue::Set(self.services),
            entertainment: ActiveValue::Set(self.entertainment),
            wi_fi: ActiveValue::Set(self.wi_fi),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
