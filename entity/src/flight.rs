use sea_orm::entity::prelude::*;

/// Operational state of a flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FlightStatus {
    #[sea_orm(string_value = "normal")]
    Normal,
    #[sea_orm(string_value = "canceled")]
    Canceled,
    #[sea_orm(string_value = "delayed")]
    Delayed,
    #[sea_orm(string_value = "ahead")]
    Ahead,
    #[sea_orm(string_value = "emergency")]
    Emergency,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub route_id: i32,
    pub airplane_id: i32,
    pub departure_time: DateTimeUtc,
    pub arrival_time: DateTimeUtc,
    pub status: FlightStatus,
    /// Set when the flight is delayed or ahead of schedule.
    pub actual_arrival_time: Option<DateTimeUtc>,
    /// Diversion airport of an emergency.
    pub emergent_destination_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::route::Entity",
        from = "Column::RouteId",
        to = "super::route::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Route,
    #[sea_orm(
        belongs_to = "super::airplane::Entity",
        from = "Column::AirplaneId",
        to = "super::airplane::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Airplane,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::EmergentDestinationId",
        to = "super::airport::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    EmergentDestination,
    #[sea_orm(has_many = "super::flight_crew::Entity")]
    FlightCrew,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Route.def()
    }
}

impl Related<super::airplane::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airplane.def()
    }
}

impl Related<super::flight_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightCrew.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl Related<super::crew::Entity> for Entity {
    fn to() -> RelationDef {
        super::flight_crew::Relation::Crew.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::flight_crew::Relation::Flight.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
