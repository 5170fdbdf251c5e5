use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        route::{CreateRouteDto, RouteDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            filter::TextFilter,
            route::{city_pair, CreateRouteParams, Route, RouteFilter},
        },
        service::route::RouteService,
        state::AppState,
    },
};

/// Tag for grouping route endpoints in OpenAPI documentation
pub static ROUTE_TAG: &str = "route";

#[derive(Deserialize)]
pub struct RouteQuery {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub source_country: Option<String>,
    pub destination_country: Option<String>,
    /// `<source city>-<destination city>`
    pub route: Option<String>,
}

impl RouteQuery {
    fn into_filter(self) -> RouteFilter {
        let (source_city, destination_city) = city_pair(self.route.as_deref());

        RouteFilter {
            source: TextFilter::new(self.source.as_deref()),
            destination: TextFilter::new(self.destination.as_deref()),
            source_country: TextFilter::new(self.source_country.as_deref()),
            destination_country: TextFilter::new(self.destination_country.as_deref()),
            source_city,
            destination_city,
        }
    }
}

/// List routes.
///
/// Text filters are case-insensitive substring matches. `source`/`destination` match
/// the airport name or its closest city; the country filters match the country name.
/// `route=Kyiv-Lviv` matches source and destination city names.
///
/// # Access Control
/// - Authenticated users
#[utoipa::path(
    get,
    path = "/api/routes",
    tag = ROUTE_TAG,
    params(
        ("source" = Option<String>, Query, description = "Source airport or city contains"),
        ("destination" = Option<String>, Query, description = "Destination airport or city contains"),
        ("source_country" = Option<String>, Query, description = "Source country contains"),
        ("destination_country" = Option<String>, Query, description = "Destination country contains"),
        ("route" = Option<String>, Query, description = "Source and destination cities as `<from>-<to>`")
    ),
    responses(
        (status = 200, description = "Matching routes", body = Vec<RouteDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_routes(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RouteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let routes = RouteService::new(&state.db)
        .list(query.into_filter())
        .await?;

    let routes: Vec<RouteDto> = routes.into_iter().map(Route::into_dto).collect();

    Ok((StatusCode::OK, Json(routes)))
}

/// Create a route between two airports.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/routes",
    tag = ROUTE_TAG,
    request_body = CreateRouteDto,
    responses(
        (status = 201, description = "Created route", body = RouteDto),
        (status = 400, description = "Same endpoints or negative distance", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_route(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRouteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CreateRouteParams::from_dto(payload)?;

    let route = RouteService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(route.into_dto())))
}

/// Get a route by ID.
#[utoipa::path(
    get,
    path = "/api/routes/{route_id}",
    tag = ROUTE_TAG,
    params(
        ("route_id" = i32, Path, description = "Route ID")
    ),
    responses(
        (status = 200, description = "Route", body = RouteDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_route(
    State(state): State<AppState>,
    session: Session,
    Path(route_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let route = RouteService::new(&state.db).get(route_id).await?;

    Ok((StatusCode::OK, Json(route.into_dto())))
}
