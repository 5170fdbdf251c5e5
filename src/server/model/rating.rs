//! Airline ratings and their weighted summary.

use chrono::{DateTime, Utc};

use crate::{
    model::rating::{AirlineRatingDto, CreateAirlineRatingDto, PaginatedAirlineRatingsDto},
    server::error::catalog::CatalogError,
};

/// Optional 1 to 5 score per rating category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingScores {
    pub boarding_deplaining: Option<i32>,
    pub crew: Option<i32>,
    pub services: Option<i32>,
    pub entertainment: Option<i32>,
    pub wi_fi: Option<i32>,
}

impl RatingScores {
    pub fn from_entity(entity: &entity::airline_rating::Model) -> Self {
        Self {
            boarding_deplaining: entity.boarding_deplaining,
            crew: entity.crew,
            services: entity.services,
            entertainment: entity.entertainment,
            wi_fi: entity.wi_fi,
        }
    }

    /// Category name, weight in the overall rating, and score.
    fn categories(&self) -> [(&'static str, f64, Option<i32>); 5] {
        [
            ("Boarding and deplaining", 0.05, self.boarding_deplaining),
            ("Crew", 0.2, self.crew),
            ("Services", 0.15, self.services),
            ("Entertainment", 0.1, self.entertainment),
            ("Wi-Fi", 0.05, self.wi_fi),
        ]
    }

    /// Checks every present score lies in 1..=5.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (category, _, score) in self.categories() {
            if let Some(score) = score.filter(|s| !(1..=5).contains(s)) {
                return Err(CatalogError::InvalidScore { category, score });
            }
        }

        Ok(())
    }
}

/// Per-category averages and the weighted overall rating of an airline.
///
/// Averages ignore unrated categories and are `None` when no rating scored the
/// category. The overall rating weighs only categories that have an average and is
/// `0.0` for an airline nobody rated. Every value is rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingSummary {
    pub overall: f64,
    pub boarding_deplaining: Option<f64>,
    pub crew: Option<f64>,
    pub services: Option<f64>,
    pub entertainment: Option<f64>,
    pub wi_fi: Option<f64>,
}

impl RatingSummary {
    pub fn from_scores<'a>(ratings: impl IntoIterator<Item = &'a RatingScores>) -> Self {
        let mut sums = [(0i64, 0u32); 5];

        for rating in ratings {
            for (slot, (_, _, score)) in sums.iter_mut().zip(rating.categories()) {
                if let Some(score) = score {
                    slot.0 += i64::from(score);
                    slot.1 += 1;
                }
            }
        }

        let averages = sums.map(|(sum, count)| (count > 0).then(|| sum as f64 / count as f64));

        let weights = RatingScores::default().categories().map(|(_, weight, _)| weight);
        let (weighted, total_weight) = averages
            .iter()
            .zip(weights)
            .filter_map(|(average, weight)| average.map(|a| (a * weight, weight)))
            .fold((0.0, 0.0), |(sum, total), (value, weight)| {
                (sum + value, total + weight)
            });

        let overall = if total_weight > 0.0 {
            round1(weighted / total_weight)
        } else {
            0.0
        };
        let [boarding_deplaining, crew, services, entertainment, wi_fi] =
            averages.map(|average| average.map(round1));

        Self {
            overall,
            boarding_deplaining,
            crew,
            services,
            entertainment,
            wi_fi,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirlineRating {
    pub id: i32,
    pub airline_id: i32,
    pub airline_name: String,
    pub scores: RatingScores,
    pub created_at: DateTime<Utc>,
}

impl AirlineRating {
    pub fn from_entity(entity: entity::airline_rating::Model, airline_name: String) -> Self {
        Self {
            id: entity.id,
            airline_id: entity.airline_id,
            airline_name,
            scores: RatingScores::from_entity(&entity),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AirlineRatingDto {
        AirlineRatingDto {
            id: self.id,
            airline_id: self.airline_id,
            airline_name: self.airline_name,
            boarding_deplaining: self.scores.boarding_deplaining,
            crew: self.scores.crew,
            services: self.scores.services,
            entertainment: self.scores.entertainment,
            wi_fi: self.scores.wi_fi,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAirlineRatingParams {
    pub airline_id: i32,
    pub scores: RatingScores,
}

impl CreateAirlineRatingParams {
    /// Converts the request DTO, rejecting scores outside 1..=5.
    pub fn from_dto(dto: CreateAirlineRatingDto) -> Result<Self, CatalogError> {
        let scores = RatingScores {
            boarding_deplaining: dto.boarding_deplaining,
            crew: dto.crew,
            services: dto.services,
            entertainment: dto.entertainment,
            wi_fi: dto.wi_fi,
        };
        scores.validate()?;

        Ok(Self {
            airline_id: dto.airline_id,
            scores,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAirlineRatings {
    pub ratings: Vec<AirlineRating>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAirlineRatings {
    pub fn into_dto(self) -> PaginatedAirlineRatingsDto {
        PaginatedAirlineRatingsDto {
            ratings: self.ratings.into_iter().map(AirlineRating::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
