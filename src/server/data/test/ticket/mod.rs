use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::ticket::TicketRepository,
    model::{flight::Seat, order::TicketRequest},
};

mod count_by_flights;
mod create;
