use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250302_000010_create_flight_table::Flight, m20250303_000012_create_order_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(integer(Ticket::OrderId))
                    .col(integer(Ticket::FlightId))
                    .col(integer(Ticket::Row))
                    .col(integer(Ticket::Seat))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_order_id")
                            .from(Ticket::Table, Ticket::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_flight_id")
                            .from(Ticket::Table, Ticket::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One ticket per seat per flight.
        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_flight_row_seat")
                    .table(Ticket::Table)
                    .col(Ticket::FlightId)
                    .col(Ticket::Row)
                    .col(Ticket::Seat)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    OrderId,
    FlightId,
    Row,
    Seat,
}
