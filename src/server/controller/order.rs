use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDto, PaginatedOrdersDto},
    },
    server::{
        controller::PaginationParams, error::AppError, middleware::auth::AuthGuard,
        model::order::PlaceOrderParams, service::booking::BookingService, state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order for one or more tickets.
///
/// All tickets are committed together or not at all.
///
/// # Access Control
/// - Authenticated users; the order belongs to the caller
///
/// # Returns
/// - `201 Created` - Order with its tickets in request order
/// - `400 Bad Request` - Empty order or seat outside the airplane grid
/// - `404 Not Found` - Unknown flight
/// - `409 Conflict` - Seat already taken or requested twice
/// - `503 Service Unavailable` - Concurrent booking held the lock; retry
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Empty order or seat out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 409, description = "Seat already taken", body = ErrorDto),
        (status = 503, description = "Concurrent booking, retry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = PlaceOrderParams::from_dto(user.id, payload);

    let order = BookingService::new(&state.db).place_order(params).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// List the caller's orders, newest first.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Caller's orders", body = PaginatedOrdersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let orders = BookingService::new(&state.db)
        .list_orders(user.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// Get one of the caller's orders.
///
/// Orders owned by other users are reported as not found.
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = BookingService::new(&state.db)
        .get_order(user.id, order_id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
