use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000007_create_airplane_table::Airplane, m20250302_000009_create_route_table::Route,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(integer(Flight::RouteId))
                    .col(integer(Flight::AirplaneId))
                    .col(timestamp(Flight::DepartureTime))
                    .col(timestamp(Flight::ArrivalTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_route_id")
                            .from(Flight::Table, Flight::RouteId)
                            .to(Route::Table, Route::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_airplane_id")
                            .from(Flight::Table, Flight::AirplaneId)
                            .to(Airplane::Table, Airplane::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flight_departure_time")
                    .table(Flight::Table)
                    .col(Flight::DepartureTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    RouteId,
    AirplaneId,
    DepartureTime,
    ArrivalTime,
}
