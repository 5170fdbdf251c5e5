//! Flight factory for creating test flight entities.
//!
//! This module provides factory methods for creating flight entities with
//! sensible defaults. The factory supports customization through a builder pattern.

use chrono::{DateTime, Duration, Utc};
use entity::flight::FlightStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db, route.id, airplane.id)
///     .departure_time(departure)
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    route_id: i32,
    airplane_id: i32,
    departure_time: DateTime<Utc>,
    duration: Duration,
    status: FlightStatus,
    actual_arrival_time: Option<DateTime<Utc>>,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - departure_time: 2 hours from now
    /// - arrival_time: 3 hours after departure
    /// - status: `FlightStatus::Normal` with no actual arrival time
    pub fn new(db: &'a DatabaseConnection, route_id: i32, airplane_id: i32) -> Self {
        Self {
            db,
            route_id,
            airplane_id,
            departure_time: Utc::now() + Duration::hours(2),
            duration: Duration::hours(3),
            status: FlightStatus::Normal,
            actual_arrival_time: None,
        }
    }

    /// Sets the departure time.
    pub fn departure_time(mut self, departure_time: DateTime<Utc>) -> Self {
        self.departure_time = departure_time;
        self
    }

    /// Sets the flight duration used to derive the arrival time.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the status together with the actual arrival time it reports.
    pub fn status(
        mut self,
        status: FlightStatus,
        actual_arrival_time: Option<DateTime<Utc>>,
    ) -> Self {
        self.status = status;
        self.actual_arrival_time = actual_arrival_time;
        self
    }

    /// Builds and inserts the flight entity into the database.
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            route_id: ActiveValue::Set(self.route_id),
            airplane_id: ActiveValue::Set(self.airplane_id),
            departure_time: ActiveValue::Set(self.departure_time),
            arrival_time: ActiveValue::Set(self.departure_time + self.duration),
            status: ActiveValue::Set(self.status),
            actual_arrival_time: ActiveValue::Set(self.actual_arrival_time),
            emergent_destination_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default times for the specified route and airplane.
pub async fn create_flight(
    db: &DatabaseConnection,
    route_id: i32,
    airplane_id: i32,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, route_id, airplane_id).build().await
}
