use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::flight::FlightRepository;

mod find_seat_grid;
mod get_departing_between;
