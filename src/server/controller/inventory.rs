//! Create and list endpoints for reference data.
//!
//! Reading requires an authenticated user; creating requires staff.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        inventory::{
            AirlineDto,
            AirplaneDto,
            AirplaneTypeDto,
            AirportDto,
            CityDto,
            CountryDto,
            CreateAirlineDto,
            CreateAirplaneDto,
            CreateAirplaneTypeDto,
            CreateAirportDto,
            CreateCityDto,
            CreateCountryDto,
            CreateCrewDto,
            CrewDto,
            PaginatedAirplanesDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            airplane::{Airplane, AirplaneType, CreateAirplaneParams, CreateAirplaneTypeParams},
            inventory::{
                Airline, Airport, City, Country, CreateAirlineParams, CreateAirportParams,
                CreateCityParams, CreateCountryParams, CreateCrewParams, Crew,
            },
        },
        service::inventory::InventoryService,
        state::AppState,
    },
};

/// Tag for grouping inventory endpoints in OpenAPI documentation
pub static INVENTORY_TAG: &str = "inventory";

/// List all countries.
#[utoipa::path(
    get,
    path = "/api/countries",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All countries", body = Vec<CountryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_countries(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let countries = InventoryService::new(&state.db).list_countries().await?;

    let countries: Vec<CountryDto> = countries.into_iter().map(Country::into_dto).collect();

    Ok((StatusCode::OK, Json(countries)))
}

/// Create a country.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/countries",
    tag = INVENTORY_TAG,
    request_body = CreateCountryDto,
    responses(
        (status = 201, description = "Created country", body = CountryDto),
        (status = 400, description = "Blank or duplicate name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_country(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CreateCountryParams::from_dto(payload);

    let country = InventoryService::new(&state.db).create_country(params).await?;

    Ok((StatusCode::CREATED, Json(country.into_dto())))
}

/// List all cities.
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All cities", body = Vec<CityDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cities(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let cities = InventoryService::new(&state.db).list_cities().await?;

    let cities: Vec<CityDto> = cities.into_iter().map(City::into_dto).collect();

    Ok((StatusCode::OK, Json(cities)))
}

/// Create a city.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/cities",
    tag = INVENTORY_TAG,
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "Created city", body = CityDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CreateCityParams::from_dto(payload);

    let city = InventoryService::new(&state.db).create_city(params).await?;

    Ok((StatusCode::CREATED, Json(city.into_dto())))
}

/// List all airports.
#[utoipa::path(
    get,
    path = "/api/airports",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All airports", body = Vec<AirportDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airports(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let airports = InventoryService::new(&state.db).list_airports().await?;

    let airports: Vec<AirportDto> = airports.into_iter().map(Airport::into_dto).collect();

    Ok((StatusCode::OK, Json(airports)))
}

/// Create a airport.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/airports",
    tag = INVENTORY_TAG,
    request_body = CreateAirportDto,
    responses(
        (status = 201, description = "Created airport", body = AirportDto),
        (status = 400, description = "Blank name, duplicate IATA code or unknown time zone", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airport(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAirportDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CreateAirportParams::from_dto(payload)?;

    let airport = InventoryService::new(&state.db).create_airport(params).await?;

    Ok((StatusCode::CREATED, Json(airport.into_dto())))
}

/// List all airlines.
#[utoipa::path(
    get,
    path = "/api/airlines",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All airlines", body = Vec<AirlineDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airlines(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let airlines = InventoryService::new(&state.db).list_airlines().await?;

    let airlines: Vec<AirlineDto> = airlines.into_iter().map(Airline::into_dto).collect();

    Ok((StatusCode::OK, Json(airlines)))
}

/// Create an airline.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/airlines",
    tag = INVENTORY_TAG,
    request_body = CreateAirlineDto,
    responses(
        (status = 201, description = "Created airline", body = AirlineDto),
        (status = 400, description = "Blank name or duplicate IATA code", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airline(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAirlineDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CreateAirlineParams::from_dto(payload);

    let airline = InventoryService::new(&state.db).create_airline(params).await?;

    Ok((StatusCode::CREATED, Json(airline.into_dto())))
}

/// Get an airline with its fleet size and rating averages.
#[utoipa::path(
    get,
    path = "/api/airlines/{airline_id}",
    tag = INVENTORY_TAG,
    params(
        ("airline_id" = i32, Path, description = "Airline ID")
    ),
    responses(
        (status = 200, description = "Airline", body = AirlineDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Airline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_airline(
    State(state): State<AppState>,
    session: Session,
    Path(airline_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let airline = InventoryService::new(&state.db)
        .get_airline(airline_id)
        .await?;

    Ok((StatusCode::OK, Json(airline.into_dto())))
}

/// List an airline's airplanes ordered by name.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/airlines/{airline_id}/airplanes",
    tag = INVENTORY_TAG,
    params(
        ("airline_id" = i32, Path, description = "Airline ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Airline fleet", body = PaginatedAirplanesDto),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airline_airplanes(
    State(state): State<AppState>,
    session: Session,
    Path(airline_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let airplanes = InventoryService::new(&state.db)
        .list_airline_airplanes(airline_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(airplanes.into_dto())))
}

/// List all airplane types.
#[utoipa::path(
    get,
    path = "/api/airplane-types",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All airplane types", body = Vec<AirplaneTypeDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airplane_types(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let airplane_types = InventoryService::new(&state.db).list_airplane_types().await?;

    let airplane_types: Vec<AirplaneTypeDto> = airplane_types.into_iter().map(AirplaneType::into_dto).collect();

    Ok((StatusCode::OK, Json(airplane_types)))
}

/// Create a airplane type.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/airplane-types",
    tag = INVENTORY_TAG,
    request_body = CreateAirplaneTypeDto,
    responses(
        (status = 201, description = "Created airplane type", body = AirplaneTypeDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airplane_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAirplaneTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CreateAirplaneTypeParams::from_dto(payload);

    let airplane_type = InventoryService::new(&state.db).create_airplane_type(params).await?;

    Ok((StatusCode::CREATED, Json(airplane_type.into_dto())))
}

/// List all airplanes.
#[utoipa::path(
    get,
    path = "/api/airplanes",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All airplanes", body = Vec<AirplaneDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airplanes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let airplanes = InventoryService::new(&state.db).list_airplanes().await?;

    let airplanes: Vec<AirplaneDto> = airplanes.into_iter().map(Airplane::into_dto).collect();

    Ok((StatusCode::OK, Json(airplanes)))
}

/// Create a airplane.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/airplanes",
    tag = INVENTORY_TAG,
    request_body = CreateAirplaneDto,
    responses(
        (status = 201, description = "Created airplane", body = AirplaneDto),
        (status = 400, description = "Blank name or non-positive seat grid", body = ErrorDto),
        (status = 404, description = "Airplane type or airline not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airplane(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAirplaneDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CreateAirplaneParams::from_dto(payload)?;

    let airplane = InventoryService::new(&state.db).create_airplane(params).await?;

    Ok((StatusCode::CREATED, Json(airplane.into_dto())))
}

/// List all crew members.
#[utoipa::path(
    get,
    path = "/api/crews",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All crew members", body = Vec<CrewDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_crews(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let crews = InventoryService::new(&state.db).list_crews().await?;

    let crews: Vec<CrewDto> = crews.into_iter().map(Crew::into_dto).collect();

    Ok((StatusCode::OK, Json(crews)))
}

/// Create a crew member.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/crews",
    tag = INVENTORY_TAG,
    request_body = CreateCrewDto,
    responses(
        (status = 201, description = "Created crew member", body = CrewDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_crew(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCrewDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CreateCrewParams::from_dto(payload);

    let crew = InventoryService::new(&state.db).create_crew(params).await?;

    Ok((StatusCode::CREATED, Json(crew.into_dto())))
}
