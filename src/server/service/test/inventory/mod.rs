use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::inventory::{CreateAirplaneDto, CreateAirportDto},
    server::{
        data::{airport::AirportRepository, location::CountryRepository},
        error::{catalog::CatalogError, unique_violation, AppError},
        model::{
            airplane::{CreateAirplaneParams, SeatGrid},
            inventory::{CreateAirportParams, CreateCityParams, CreateCountryParams},
        },
        service::inventory::InventoryService,
    },
};

mod airplane;
mod location;
