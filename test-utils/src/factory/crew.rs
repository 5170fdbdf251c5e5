//! Crew factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a crew member named `"Pilot {id}"`.
pub async fn create_crew(db: &DatabaseConnection) -> Result<entity::crew::Model, DbErr> {
    entity::crew::ActiveModel {
        first_name: ActiveValue::Set("Pilot".to_string()),
        last_name: ActiveValue::Set(next_id().to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
