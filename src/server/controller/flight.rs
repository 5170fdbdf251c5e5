use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        flight::{CreateFlightDto, FlightDto, PaginatedFlightsDto, UpdateFlightStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            filter::TextFilter,
            flight::{CreateFlightParams, FlightFilter, UpdateFlightStatusParams},
        },
        service::flight::FlightService,
        state::AppState,
        util::parse::parse_date,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

#[derive(Deserialize)]
pub struct FlightQuery {
    pub source: Option<String>,
    pub destination: Option<String>,
    /// `YYYY-MM-DD`
    pub departure_date: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// List flights.
///
/// Returns flights ordered by departure time with the number of seats still available.
/// `departure_date` selects one calendar day in the server's configured UTC offset.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Paginated flights
/// - `400 Bad Request` - Malformed `departure_date`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    params(
        ("source" = Option<String>, Query, description = "Source airport or city contains"),
        ("destination" = Option<String>, Query, description = "Destination airport or city contains"),
        ("departure_date" = Option<String>, Query, description = "Departure day, YYYY-MM-DD"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Matching flights", body = PaginatedFlightsDto),
        (status = 400, description = "Malformed departure date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightQuery>,
) -> Result<impl IntoResponse, AppError> {
    let departure_date = query
        .departure_date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(parse_date)
        .transpose()?;

    let filter = FlightFilter {
        source: TextFilter::new(query.source.as_deref()),
        destination: TextFilter::new(query.destination.as_deref()),
        departure_date,
        date_offset: state.flight_date_offset,
    };

    let flights = FlightService::new(&state.db)
        .list(filter, query.page, query.entries)
        .await?;

    Ok((StatusCode::OK, Json(flights.into_dto())))
}

/// Create a flight.
///
/// Times use `YYYY-MM-DD HH:MM` in UTC. Arrival must be after departure.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    request_body = CreateFlightDto,
    responses(
        (status = 201, description = "Created flight", body = FlightDto),
        (status = 400, description = "Invalid schedule or malformed time", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Route, airplane or crew not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CreateFlightParams::from_dto(payload)?;

    let flight = FlightService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(flight.into_dto())))
}

/// Get flight detail including crew and taken seats.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/flights/{flight_id}",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Flight detail", body = FlightDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    Path(flight_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db).get(flight_id).await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Change a flight's status.
///
/// `delayed` and `ahead` need `actual_arrival_time` (`YYYY-MM-DD HH:MM`, UTC);
/// `emergency` needs `emergent_destination_id`. Fields the new status does not use
/// are cleared.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    patch,
    path = "/api/flights/{flight_id}/status",
    tag = FLIGHT_TAG,
    params(
        ("flight_id" = i32, Path, description = "Flight ID")
    ),
    request_body = UpdateFlightStatusDto,
    responses(
        (status = 200, description = "Updated flight", body = FlightDto),
        (status = 400, description = "Missing field for the status or malformed time", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Flight or emergent destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight_status(
    State(state): State<AppState>,
    session: Session,
    Path(flight_id): Path<i32>,
    Json(payload): Json<UpdateFlightStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = UpdateFlightStatusParams::from_dto(payload)?;

    let flight = FlightService::new(&state.db)
        .update_status(flight_id, params)
        .await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}
