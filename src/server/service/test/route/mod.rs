use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::{
        filter::TextFilter,
        route::{city_pair, CreateRouteParams, RouteFilter},
    },
    service::route::RouteService,
};

mod create;
mod list;
