//! Route factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a route between two existing airports with a default distance of 1000 km.
pub async fn create_route(
    db: &DatabaseConnection,
    source_id: i32,
    destination_id: i32,
) -> Result<entity::route::Model, DbErr> {
    entity::route::ActiveModel {
        source_id: ActiveValue::Set(source_id),
        destination_id: ActiveValue::Set(destination_id),
        distance: ActiveValue::Set(1000),
        ..Default::default()
    }
    .insert(db)
    .await
}
