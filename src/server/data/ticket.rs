//! Ticket repository.
//!
//! Tickets are only ever inserted by the booking engine inside its order transaction.
//! The unique `(flight_id, row, seat)` index backs up the engine's own occupancy check.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{flight::Seat, order::TicketRequest};

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        order_id: i32,
        request: TicketRequest,
    ) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            flight_id: ActiveValue::Set(request.flight_id),
            row: ActiveValue::Set(request.row),
            seat: ActiveValue::Set(request.seat),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Checks whether a committed ticket already holds the seat.
    pub async fn is_taken(&self, flight_id: i32, row: i32, seat: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::FlightId.eq(flight_id))
            .filter(entity::ticket::Column::Row.eq(row))
            .filter(entity::ticket::Column::Seat.eq(seat))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every taken seat on a flight, sorted by row then seat.
    pub async fn get_taken_seats(&self, flight_id: i32) -> Result<Vec<Seat>, DbErr> {
        let tickets = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::FlightId.eq(flight_id))
            .order_by_asc(entity::ticket::Column::Row)
            .order_by_asc(entity::ticket::Column::Seat)
            .all(self.db)
            .await?;

        Ok(tickets
            .into_iter()
            .map(|t| Seat {
                row: t.row,
                seat: t.seat,
            })
            .collect())
    }

    /// Counts sold tickets per flight.
    ///
    /// Flights without tickets are absent from the map.
    pub async fn count_by_flights(&self, flight_ids: Vec<i32>) -> Result<HashMap<i32, i64>, DbErr> {
        if flight_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sold: Vec<i32> = entity::prelude::Ticket::find()
            .select_only()
            .column(entity::ticket::Column::FlightId)
            .filter(entity::ticket::Column::FlightId.is_in(flight_ids))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts: HashMap<i32, i64> = HashMap::new();
        for flight_id in sold {
            *counts.entry(flight_id).or_default() += 1;
        }

        Ok(counts)
    }

    /// Gets the tickets of each order, keyed by order ID, in insertion order.
    pub async fn get_by_order_ids(
        &self,
        order_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<entity::ticket::Model>>, DbErr> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let tickets = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::ticket::Model>> = HashMap::new();
        for ticket in tickets {
            grouped.entry(ticket.order_id).or_default().push(ticket);
        }

        Ok(grouped)
    }
}
