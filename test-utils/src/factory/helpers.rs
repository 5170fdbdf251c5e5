//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Entities created by `create_flight_with_dependencies`.
pub struct FlightDependencies {
    pub source: entity::airport::Model,
    pub destination: entity::airport::Model,
    pub route: entity::route::Model,
    pub airplane: entity::airplane::Model,
    pub flight: entity::flight::Model,
}

/// Creates an airport together with its country and city.
///
/// # Arguments
/// - `db` - Database connection
/// - `country` - Country name, created if needed
/// - `city` - City name
/// - `airport` - Airport name
///
/// # Returns
/// - `Ok(entity::airport::Model)` - Created airport
/// - `Err(DbErr)` - Database error during creation
pub async fn create_airport_in(
    db: &DatabaseConnection,
    country: &str,
    city: &str,
    airport: &str,
) -> Result<entity::airport::Model, DbErr> {
    let country = factory::location::find_or_create_country(db, country).await?;
    let city = factory::location::CityFactory::new(db, country.id)
        .name(city)
        .build()
        .await?;

    factory::airport::AirportFactory::new(db, city.id)
        .name(airport)
        .build()
        .await
}

/// Creates an airplane with the given seat grid and a fresh airplane type.
pub async fn create_airplane_with_grid(
    db: &DatabaseConnection,
    rows: i32,
    seats_per_row: i32,
) -> Result<entity::airplane::Model, DbErr> {
    let airplane_type = factory::airplane::create_airplane_type(db).await?;

    factory::airplane::AirplaneFactory::new(db, airplane_type.id)
        .rows(rows)
        .seats_per_row(seats_per_row)
        .build()
        .await
}

/// Creates a complete flight hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Two airports (each with its own country and city)
/// 2. Route between them
/// 3. Airplane type and airplane with a 3 × 4 seat grid
/// 4. Flight departing in two hours
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(FlightDependencies)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_dependencies(
    db: &DatabaseConnection,
) -> Result<FlightDependencies, DbErr> {
    let airplane = create_airplane_with_grid(db, 3, 4).await?;
    create_flight_with_airplane(db, &airplane).await
}

/// Creates a flight on a fresh route using the provided airplane.
pub async fn create_flight_with_airplane(
    db: &DatabaseConnection,
    airplane: &entity::airplane::Model,
) -> Result<FlightDependencies, DbErr> {
    let source = factory::airport::create_airport(db).await?;
    let destination = factory::airport::create_airport(db).await?;
    let route = factory::route::create_route(db, source.id, destination.id).await?;
    let flight = factory::flight::create_flight(db, route.id, airplane.id).await?;

    Ok(FlightDependencies {
        source,
        destination,
        route,
        airplane: airplane.clone(),
        flight,
    })
}
