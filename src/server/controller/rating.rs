use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        rating::{AirlineRatingDto, CreateAirlineRatingDto, PaginatedAirlineRatingsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::rating::CreateAirlineRatingParams,
        service::rating::RatingService,
        state::AppState,
    },
};

/// Tag for grouping rating endpoints in OpenAPI documentation
pub static RATING_TAG: &str = "rating";

#[derive(Deserialize)]
pub struct RatingQuery {
    pub airline_name: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// List ratings of airlines whose name contains `airline_name`, newest first.
///
/// # Access Control
/// - Authenticated user
#[utoipa::path(
    get,
    path = "/api/ratings",
    tag = RATING_TAG,
    params(
        ("airline_name" = String, Query, description = "Airline name contains"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Ratings", body = PaginatedAirlineRatingsDto),
        (status = 400, description = "Missing airline name or page out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ratings(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RatingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ratings = RatingService::new(&state.db)
        .list(query.airline_name.as_deref(), query.page, query.entries)
        .await?;

    Ok((StatusCode::OK, Json(ratings.into_dto())))
}

/// Rate an airline.
///
/// Every category is optional; present scores must be between 1 and 5.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/ratings",
    tag = RATING_TAG,
    request_body = CreateAirlineRatingDto,
    responses(
        (status = 201, description = "Created rating", body = AirlineRatingDto),
        (status = 400, description = "Score out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rating(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAirlineRatingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = CreateAirlineRatingParams::from_dto(payload)?;

    let rating = RatingService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(rating.into_dto())))
}
