use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airline::Table)
                    .if_not_exists()
                    .col(pk_auto(Airline::Id))
                    .col(string(Airline::Name))
                    .col(string_null(Airline::Headquarters))
                    .col(string_len_null(Airline::IataCode, 20).unique_key())
                    .col(string_null(Airline::WebSiteAddress))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airline {
    Table,
    Id,
    Name,
    Headquarters,
    IataCode,
    WebSiteAddress,
}
