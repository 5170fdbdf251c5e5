use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AirlineRatingDto {
    pub id: i32,
    pub airline_id: i32,
    pub airline_name: String,
    pub boarding_deplaining: Option<i32>,
    pub crew: Option<i32>,
    pub services: Option<i32>,
    pub entertainment: Option<i32>,
    pub wi_fi: Option<i32>,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = i64)]
    pub created_at: DateTime<Utc>,
}

/// Scores are 1 to 5; omitted categories stay unrated.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAirlineRatingDto {
    pub airline_id: i32,
    #[serde(default)]
    pub boarding_deplaining: Option<i32>,
    #[serde(default)]
    pub crew: Option<i32>,
    #[serde(default)]
    pub services: Option<i32>,
    #[serde(default)]
    pub entertainment: Option<i32>,
    #[serde(default)]
    pub wi_fi: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedAirlineRatingsDto {
    pub ratings: Vec<AirlineRatingDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
