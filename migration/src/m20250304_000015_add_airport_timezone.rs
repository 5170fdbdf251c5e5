use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000004_create_airport_table::Airport;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Airport::Table)
                    .add_column(string_len(AirportTimezone::Timezone, 63).default("UTC"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Airport::Table)
                    .drop_column(AirportTimezone::Timezone)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum AirportTimezone {
    Timezone,
}
