use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000010_create_flight_table::Flight;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite adds one column per ALTER TABLE.
        manager
            .alter_table(
                Table::alter()
                    .table(Flight::Table)
                    .add_column(string_len(FlightStatus::Status, 16).default("normal"))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Flight::Table)
                    .add_column(timestamp_null(FlightStatus::ActualArrivalTime))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Flight::Table)
                    .add_column(integer_null(FlightStatus::EmergentDestinationId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Flight::Table)
                    .drop_column(FlightStatus::EmergentDestinationId)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Flight::Table)
                    .drop_column(FlightStatus::ActualArrivalTime)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Flight::Table)
                    .drop_column(FlightStatus::Status)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightStatus {
    Status,
    ActualArrivalTime,
    EmergentDestinationId,
}
