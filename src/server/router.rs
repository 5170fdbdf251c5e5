use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        flight::{self, FLIGHT_TAG},
        inventory::{self, INVENTORY_TAG},
        order::{self, ORDER_TAG},
        rating::{self, RATING_TAG},
        route::{self, ROUTE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Airport API", description = "Flight catalog and ticket booking"),
    tags(
        (name = AUTH_TAG, description = "Session user"),
        (name = INVENTORY_TAG, description = "Countries, cities, airports, airlines, airplanes and crews"),
        (name = ROUTE_TAG, description = "Routes between airports"),
        (name = FLIGHT_TAG, description = "Scheduled flights and seat availability"),
        (name = ORDER_TAG, description = "Ticket orders"),
        (name = RATING_TAG, description = "Airline ratings"),
    )
)]
struct ApiDoc;

/// Build the API router and serve its OpenAPI document at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::logout))
        .routes(routes!(inventory::list_countries, inventory::create_country))
        .routes(routes!(inventory::list_cities, inventory::create_city))
        .routes(routes!(inventory::list_airports, inventory::create_airport))
        .routes(routes!(inventory::list_airlines, inventory::create_airline))
        .routes(routes!(inventory::get_airline))
        .routes(routes!(inventory::list_airline_airplanes))
        .routes(routes!(
            inventory::list_airplane_types,
            inventory::create_airplane_type
        ))
        .routes(routes!(inventory::list_airplanes, inventory::create_airplane))
        .routes(routes!(inventory::list_crews, inventory::create_crew))
        .routes(routes!(route::list_routes, route::create_route))
        .routes(routes!(route::get_route))
        .routes(routes!(flight::list_flights, flight::create_flight))
        .routes(routes!(flight::get_flight))
        .routes(routes!(flight::update_flight_status))
        .routes(routes!(rating::list_ratings, rating::create_rating))
        .routes(routes!(order::list_orders, order::create_order))
        .routes(routes!(order::get_order))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
