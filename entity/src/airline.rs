use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "airline")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub headquarters: Option<String>,
    #[sea_orm(unique)]
    pub iata_code: Option<String>,
    pub web_site_address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::airplane::Entity")]
    Airplane,
    #[sea_orm(has_many = "super::airline_rating::Entity")]
    AirlineRating,
}

impl Related<super::airplane::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airplane.def()
    }
}

impl Related<super::airline_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AirlineRating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
