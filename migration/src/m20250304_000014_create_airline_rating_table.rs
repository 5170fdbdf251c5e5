use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000005_create_airline_table::Airline;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AirlineRating::Table)
                    .if_not_exists()
                    .col(pk_auto(AirlineRating::Id))
                    .col(integer(AirlineRating::AirlineId))
                    .col(score(AirlineRating::BoardingDeplaining))
                    .col(score(AirlineRating::Crew))
                    .col(score(AirlineRating::Services))
                    .col(score(AirlineRating::Entertainment))
                    .col(score(AirlineRating::WiFi))
                    .col(
                        timestamp(AirlineRating::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_airline_rating_airline_id")
                            .from(AirlineRating::Table, AirlineRating::AirlineId)
                            .to(Airline::Table, Airline::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_airline_rating_airline_id")
                    .table(AirlineRating::Table)
                    .col(AirlineRating::AirlineId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AirlineRating::Table).to_owned())
            .await
    }
}

/// Nullable score constrained to 1..=5.
fn score(column: AirlineRating) -> ColumnDef {
    integer_null(column)
        .check(Expr::col(column).between(1, 5))
        .to_owned()
}

#[derive(DeriveIden, Clone, Copy)]
pub enum AirlineRating {
    Table,
    Id,
    AirlineId,
    BoardingDeplaining,
    Crew,
    Services,
    Entertainment,
    WiFi,
    CreatedAt,
}
