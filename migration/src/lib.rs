pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_country_table;
mod m20250301_000003_create_city_table;
mod m20250301_000004_create_airport_table;
mod m20250301_000005_create_airline_table;
mod m20250301_000006_create_airplane_type_table;
mod m20250301_000007_create_airplane_table;
mod m20250301_000008_create_crew_table;
mod m20250302_000009_create_route_table;
mod m20250302_000010_create_flight_table;
mod m20250302_000011_create_flight_crew_table;
mod m20250303_000012_create_order_table;
mod m20250303_000013_create_ticket_table;
mod m20250304_000014_create_airline_rating_table;
mod m20250304_000015_add_airport_timezone;
mod m20250304_000016_add_flight_status;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_country_table::Migration),
            Box::new(m20250301_000003_create_city_table::Migration),
            Box::new(m20250301_000004_create_airport_table::Migration),
            Box::new(m20250301_000005_create_airline_table::Migration),
            Box::new(m20250301_000006_create_airplane_type_table::Migration),
            Box::new(m20250301_000007_create_airplane_table::Migration),
            Box::new(m20250301_000008_create_crew_table::Migration),
            Box::new(m20250302_000009_create_route_table::Migration),
            Box::new(m20250302_000010_create_flight_table::Migration),
            Box::new(m20250302_000011_create_flight_crew_table::Migration),
            Box::new(m20250303_000012_create_order_table::Migration),
            Box::new(m20250303_000013_create_ticket_table::Migration),
            Box::new(m20250304_000014_create_airline_rating_table::Migration),
            Box::new(m20250304_000015_add_airport_timezone::Migration),
            Box::new(m20250304_000016_add_flight_status::Migration),
        ]
    }
}
