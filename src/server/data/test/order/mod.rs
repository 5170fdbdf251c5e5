use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::order::OrderRepository;

mod find_for_user;
mod get_by_user_paginated;
