use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::rating::CreateAirlineRatingDto,
    server::{
        error::{catalog::CatalogError, AppError},
        model::rating::{CreateAirlineRatingParams, RatingScores},
        service::{inventory::InventoryService, rating::RatingService},
    },
};

mod create;
mod list;
