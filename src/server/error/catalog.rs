use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Validation failures for inventory and flight catalog records.
///
/// All variants result in a 400 Bad Request with the message returned to the client.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Arrival must be strictly after departure.
    #[error("Arrival time {arrival} must be after departure time {departure}")]
    InvalidSchedule {
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
    },

    /// A route cannot start and end at the same airport.
    #[error("Route source and destination must be different airports")]
    SameEndpoints,

    /// Route distance below zero.
    #[error("Route distance must not be negative, got {0}")]
    NegativeDistance(i32),

    /// Airplanes need at least one row and one seat per row.
    #[error("Airplane must have positive rows and seats per row, got {rows}x{seats_per_row}")]
    InvalidSeatGrid { rows: i32, seats_per_row: i32 },

    /// Time zone name not in the IANA database.
    #[error("Unknown time zone '{0}'")]
    InvalidTimezone(String),

    /// Rating scores range from 1 to 5.
    #[error("{category} rating must be between 1 and 5, got {score}")]
    InvalidScore { category: &'static str, score: i32 },

    /// Delayed and ahead-of-schedule flights report when they actually arrive.
    #[error("Flight status '{0}' requires an actual arrival time")]
    MissingActualArrival(&'static str),

    /// An emergency names the airport the flight diverts to.
    #[error("Flight status 'emergency' requires an emergent destination")]
    MissingEmergentDestination,
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
