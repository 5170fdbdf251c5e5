//! Order and ticket factories.
//!
//! These insert rows directly, bypassing booking validation, so tests can seed
//! already-sold seats.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an empty order owned by the given user.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    entity::order::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a ticket for the given seat within an existing order.
pub async fn create_ticket(
    db: &DatabaseConnection,
    order_id: i32,
    flight_id: i32,
    row: i32,
    seat: i32,
) -> Result<entity::ticket::Model, DbErr> {
    entity::ticket::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        flight_id: ActiveValue::Set(flight_id),
        row: ActiveValue::Set(row),
        seat: ActiveValue::Set(seat),
        ..Default::default()
    }
    .insert(db)
    .await
}
