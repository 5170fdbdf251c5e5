use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use entity::flight::FlightStatus;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::flight::CreateFlightDto,
    server::{
        error::{catalog::CatalogError, AppError},
        model::{
            filter::TextFilter,
            flight::{CreateFlightParams, FlightFilter, UpdateFlightStatusParams},
        },
        service::flight::FlightService,
    },
};

mod create;
mod get;
mod list;
mod status;
