//! Airline factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an airline named `"Airline {id}"` with no optional fields set.
pub async fn create_airline(db: &DatabaseConnection) -> Result<entity::airline::Model, DbErr> {
    create_airline_named(db, &format!("Airline {}", next_id())).await
}

/// Creates an airline with the given name and no optional fields set.
pub async fn create_airline_named(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::airline::Model, DbErr> {
    entity::airline::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        headquarters: ActiveValue::Set(None),
        iata_code: ActiveValue::Set(None),
        web_site_address: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
