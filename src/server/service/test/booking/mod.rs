use entity::prelude::Ticket;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{booking::BookingError, AppError},
    model::order::{PlaceOrderParams, TicketRequest},
    service::booking::BookingService,
};

mod contention;
mod orders;

fn ticket(flight_id: i32, row: i32, seat: i32) -> TicketRequest {
    TicketRequest {
        flight_id,
        row,
        seat,
    }
}
