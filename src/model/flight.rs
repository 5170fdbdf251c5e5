use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    inventory::{AirplaneDto, CrewDto},
    route::RouteDto,
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateFlightDto {
    pub route_id: i32,
    pub airplane_id: i32,
    pub departure_time: String, // Format: "YYYY-MM-DD HH:MM" in UTC
    pub arrival_time: String,   // Format: "YYYY-MM-DD HH:MM" in UTC
    #[serde(default)]
    pub crew: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatusDto {
    Normal,
    Canceled,
    Delayed,
    Ahead,
    Emergency,
}

/// New status of a flight.
///
/// `delayed` and `ahead` require `actual_arrival_time`; `emergency` requires
/// `emergent_destination_id`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateFlightStatusDto {
    pub status: FlightStatusDto,
    #[serde(default)]
    pub actual_arrival_time: Option<String>, // Format: "YYYY-MM-DD HH:MM" in UTC
    #[serde(default)]
    pub emergent_destination_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub struct SeatDto {
    pub row: i32,
    pub seat: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlightDto {
    pub id: i32,
    pub route: RouteDto,
    pub airplane: AirplaneDto,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = i64)]
    pub departure_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = i64)]
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatusDto,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    #[schema(value_type = Option<i64>)]
    pub actual_arrival_time: Option<DateTime<Utc>>,
    pub emergent_destination_id: Option<i32>,
    pub crew: Vec<CrewDto>,
    pub taken_places: Vec<SeatDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlightListItemDto {
    pub id: i32,
    pub route: RouteDto,
    pub airplane_id: i32,
    pub airplane_name: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = i64)]
    pub departure_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = i64)]
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatusDto,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    #[schema(value_type = Option<i64>)]
    pub actual_arrival_time: Option<DateTime<Utc>>,
    pub tickets_available: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedFlightsDto {
    pub flights: Vec<FlightListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
