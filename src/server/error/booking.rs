use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reasons an order is rejected by the booking engine.
///
/// Every variant implies that nothing was committed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// The order contained no tickets.
    #[error("An order must contain at least one ticket")]
    EmptyOrder,

    /// The requested row or seat lies outside the airplane's seat grid.
    #[error("Seat {row}-{seat} is out of range for flight {flight_id}")]
    OutOfRangeSeat { flight_id: i32, row: i32, seat: i32 },

    /// The seat is already sold, or requested twice in the same order.
    #[error("Seat {row}-{seat} on flight {flight_id} is already taken")]
    SeatTaken { flight_id: i32, row: i32, seat: i32 },

    /// The store could not acquire the write lock in time; the order may be retried.
    #[error("Could not place the order due to a concurrent booking, please retry")]
    Conflict,
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::EmptyOrder | Self::OutOfRangeSeat { .. } => StatusCode::BAD_REQUEST,
            Self::SeatTaken { .. } => StatusCode::CONFLICT,
            Self::Conflict => StatusCode::SERVICE_UNAVAILABLE,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
