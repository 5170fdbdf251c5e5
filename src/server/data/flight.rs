//! Flight repository.

use chrono::{DateTime, Utc};
use entity::flight::FlightStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{
    airplane::SeatGrid,
    flight::{CreateFlightParams, UpdateFlightStatusParams},
};

pub struct FlightRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a flight and its crew assignments.
    ///
    /// Run this on a transaction so the flight and its crew commit together.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - The inserted flight
    /// - `Err(DbErr)` - Insert failed
    pub async fn create(&self, params: &CreateFlightParams) -> Result<entity::flight::Model, DbErr> {
        let flight = entity::flight::ActiveModel {
            route_id: ActiveValue::Set(params.route_id),
            airplane_id: ActiveValue::Set(params.airplane_id),
            departure_time: ActiveValue::Set(params.departure_time),
            arrival_time: ActiveValue::Set(params.arrival_time),
            status: ActiveValue::Set(FlightStatus::Normal),
            actual_arrival_time: ActiveValue::Set(None),
            emergent_destination_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for crew_id in &params.crew_ids {
            entity::flight_crew::ActiveModel {
                flight_id: ActiveValue::Set(flight.id),
                crew_id: ActiveValue::Set(*crew_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(flight)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find_by_id(id).one(self.db).await
    }

    /// Overwrites a flight's status, actual arrival time and emergent destination.
    ///
    /// # Returns
    /// - `Ok(Some(entity::flight::Model))` - The updated flight
    /// - `Ok(None)` - No flight with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        params: &UpdateFlightStatusParams,
    ) -> Result<Option<entity::flight::Model>, DbErr> {
        let Some(flight) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut flight = flight.into_active_model();
        flight.status = ActiveValue::Set(params.status);
        flight.actual_arrival_time = ActiveValue::Set(params.actual_arrival_time);
        flight.emergent_destination_id = ActiveValue::Set(params.emergent_destination_id);

        flight.update(self.db).await.map(Some)
    }

    /// Gets the seat grid of the airplane assigned to a flight.
    ///
    /// # Returns
    /// - `Ok(Some(SeatGrid))` - Flight exists
    /// - `Ok(None)` - No flight with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_seat_grid(&self, flight_id: i32) -> Result<Option<SeatGrid>, DbErr> {
        let result = entity::prelude::Flight::find_by_id(flight_id)
            .find_also_related(entity::prelude::Airplane)
            .one(self.db)
            .await?;

        Ok(result
            .and_then(|(_, airplane)| airplane)
            .map(|airplane| SeatGrid {
                rows: airplane.rows,
                seats_per_row: airplane.seats_per_row,
            }))
    }

    /// Gets flights ordered by departure time, optionally limited to departures in
    /// `[start, end)`.
    pub async fn get_departing_between(
        &self,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<entity::flight::Model>, DbErr> {
        let mut query = entity::prelude::Flight::find();

        if let Some((start, end)) = range {
            query = query
                .filter(entity::flight::Column::DepartureTime.gte(start))
                .filter(entity::flight::Column::DepartureTime.lt(end));
        }

        query
            .order_by_asc(entity::flight::Column::DepartureTime)
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await
    }
}
