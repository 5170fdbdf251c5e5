//! Booking engine.
//!
//! `place_order` commits an order and all of its tickets atomically, or nothing. The
//! order row is inserted first so the transaction holds SQLite's write lock before any
//! seat is checked; a concurrent order waits on that lock and then sees the committed
//! tickets. The unique `(flight_id, row, seat)` index rejects anything that slips past.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait,
};

use crate::server::{
    data::{flight::FlightRepository, order::OrderRepository, ticket::TicketRepository},
    error::{booking::BookingError, is_transient, AppError},
    model::{
        airplane::SeatGrid,
        filter::{page_offset, total_pages},
        order::{Order, PaginatedOrders, PlaceOrderParams, TicketRequest},
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for the authenticated user.
    ///
    /// Checks run in this order: empty order, unknown flight, seat bounds, duplicates
    /// within the request, seats already sold. The first failure aborts and rolls back.
    ///
    /// # Arguments
    /// - `params` - Owning user and the requested tickets
    ///
    /// # Returns
    /// - `Ok(Order)` - Committed order with tickets in request order
    /// - `Err(BookingError::EmptyOrder)` - No tickets requested
    /// - `Err(AppError::NotFound)` - A requested flight does not exist
    /// - `Err(BookingError::OutOfRangeSeat)` - Row or seat outside the airplane grid
    /// - `Err(BookingError::SeatTaken)` - Seat requested twice or already sold
    /// - `Err(BookingError::Conflict)` - The write lock could not be acquired; retryable
    pub async fn place_order(&self, params: PlaceOrderParams) -> Result<Order, AppError> {
        if params.tickets.is_empty() {
            return Err(BookingError::EmptyOrder.into());
        }

        let txn = self.db.begin().await.map_err(lock_error)?;

        let order = OrderRepository::new(&txn)
            .create(params.user_id, Utc::now())
            .await
            .map_err(lock_error)?;

        let grids = load_seat_grids(&txn, &params.tickets).await?;

        for request in &params.tickets {
            let in_range = grids
                .get(&request.flight_id)
                .is_some_and(|grid| grid.contains(request.row, request.seat));

            if !in_range {
                return Err(BookingError::OutOfRangeSeat {
                    flight_id: request.flight_id,
                    row: request.row,
                    seat: request.seat,
                }
                .into());
            }
        }

        let mut requested = HashSet::new();
        for request in &params.tickets {
            if !requested.insert((request.flight_id, request.row, request.seat)) {
                return Err(seat_taken(request).into());
            }
        }

        let ticket_repo = TicketRepository::new(&txn);

        for request in &params.tickets {
            if ticket_repo
                .is_taken(request.flight_id, request.row, request.seat)
                .await
                .map_err(lock_error)?
            {
                return Err(seat_taken(request).into());
            }
        }

        let mut tickets = Vec::with_capacity(params.tickets.len());
        for request in &params.tickets {
            let ticket = ticket_repo
                .create(order.id, *request)
                .await
                .map_err(|e| insert_error(e, request))?;
            tickets.push(ticket);
        }

        txn.commit().await.map_err(lock_error)?;

        tracing::info!(
            "User {} placed order {} with {} tickets",
            params.user_id,
            order.id,
            tickets.len()
        );

        Ok(Order::from_entity(order, tickets))
    }

    /// Lists the user's orders, newest first.
    ///
    /// # Returns
    /// - `Ok(PaginatedOrders)` - The requested page, possibly empty
    /// - `Err(AppError::BadRequest)` - `page × per_page` is out of range
    pub async fn list_orders(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedOrders, AppError> {
        page_offset(page, per_page)?;

        let (orders, total) = OrderRepository::new(self.db)
            .get_by_user_paginated(user_id, page, per_page)
            .await?;

        let mut tickets = TicketRepository::new(self.db)
            .get_by_order_ids(orders.iter().map(|o| o.id).collect())
            .await?;

        let orders = orders
            .into_iter()
            .map(|order| {
                let order_tickets = tickets.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, order_tickets)
            })
            .collect();

        Ok(PaginatedOrders {
            orders,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Gets one of the user's orders.
    ///
    /// # Returns
    /// - `Ok(Order)` - The order with its tickets
    /// - `Err(AppError::NotFound)` - No such order, or it belongs to another user
    pub async fn get_order(&self, user_id: i32, order_id: i32) -> Result<Order, AppError> {
        let Some(order) = OrderRepository::new(self.db)
            .find_for_user(order_id, user_id)
            .await?
        else {
            return Err(AppError::NotFound(format!("Order {} not found", order_id)));
        };

        let mut tickets = TicketRepository::new(self.db)
            .get_by_order_ids(vec![order.id])
            .await?;

        let order_tickets = tickets.remove(&order.id).unwrap_or_default();

        Ok(Order::from_entity(order, order_tickets))
    }
}

/// Loads the seat grid of every distinct flight in the request through the transaction.
async fn load_seat_grids(
    txn: &DatabaseTransaction,
    tickets: &[TicketRequest],
) -> Result<HashMap<i32, SeatGrid>, AppError> {
    let flight_repo = FlightRepository::new(txn);
    let mut grids = HashMap::new();

    for request in tickets {
        if grids.contains_key(&request.flight_id) {
            continue;
        }

        let Some(grid) = flight_repo
            .find_seat_grid(request.flight_id)
            .await
            .map_err(lock_error)?
        else {
            return Err(AppError::NotFound(format!(
                "Flight {} not found",
                request.flight_id
            )));
        };

        grids.insert(request.flight_id, grid);
    }

    Ok(grids)
}

fn seat_taken(request: &TicketRequest) -> BookingError {
    BookingError::SeatTaken {
        flight_id: request.flight_id,
        row: request.row,
        seat: request.seat,
    }
}

/// Maps busy/locked failures to a retryable conflict.
fn lock_error(err: DbErr) -> AppError {
    if is_transient(&err) {
        tracing::warn!("Order placement hit a locked database: {}", err);
        return BookingError::Conflict.into();
    }

    err.into()
}

/// Maps a ticket insert failure; a unique violation means another order won the seat.
fn insert_error(err: DbErr, request: &TicketRequest) -> AppError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return seat_taken(request).into();
    }

    lock_error(err)
}
