use sea_orm::entity::prelude::*;

/// Passenger rating of an airline. Each category is an optional score from 1 to 5.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "airline_rating")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub airline_id: i32,
    pub boarding_deplaining: Option<i32>,
    pub crew: Option<i32>,
    pub services: Option<i32>,
    pub entertainment: Option<i32>,
    pub wi_fi: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airline::Entity",
        from = "Column::AirlineId",
        to = "super::airline::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Airline,
}

impl Related<super::airline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
