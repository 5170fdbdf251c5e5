use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000008_create_crew_table::Crew, m20250302_000010_create_flight_table::Flight,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightCrew::Table)
                    .if_not_exists()
                    .col(integer(FlightCrew::FlightId))
                    .col(integer(FlightCrew::CrewId))
                    .primary_key(
                        Index::create()
                            .col(FlightCrew::FlightId)
                            .col(FlightCrew::CrewId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_crew_flight_id")
                            .from(FlightCrew::Table, FlightCrew::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_crew_crew_id")
                            .from(FlightCrew::Table, FlightCrew::CrewId)
                            .to(Crew::Table, Crew::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightCrew::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightCrew {
    Table,
    FlightId,
    CrewId,
}
