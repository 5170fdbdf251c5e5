use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::route::RouteRepository, model::route::CreateRouteParams};

mod create;
mod get_all;
