use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Country, City};
///
/// let test = TestBuilder::new()
///     .with_table(Country)
///     .with_table(City)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a raw index statement, executed after every table has been created.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the reference data tables: countries, cities, airports, airlines and their
    /// ratings, airplane types, airplanes and crews.
    pub fn with_inventory_tables(self) -> Self {
        self.with_table(Country)
            .with_table(City)
            .with_table(Airport)
            .with_table(Airline)
            .with_table(AirlineRating)
            .with_table(AirplaneType)
            .with_table(Airplane)
            .with_table(Crew)
    }

    /// Adds everything required to create and query flights.
    ///
    /// Includes the inventory tables plus Route, Flight, FlightCrew and Ticket. Ticket is
    /// present so seat availability can be computed for flight listings.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_flight_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_flight_tables(self) -> Self {
        self.with_table(User)
            .with_inventory_tables()
            .with_table(Route)
            .with_table(Flight)
            .with_table(FlightCrew)
            .with_table(Order)
            .with_table(Ticket)
            .with_index(ticket_seat_index())
    }

    /// Adds all tables required for booking operations.
    ///
    /// Equivalent to `with_flight_tables()`; kept as a separate name so booking tests
    /// read as what they exercise.
    pub fn with_booking_tables(self) -> Self {
        self.with_flight_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements followed by all CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique `(flight_id, row, seat)` index mirroring the `create_ticket_table` migration.
pub fn ticket_seat_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_ticket_flight_row_seat")
        .table(Ticket)
        .col(entity::ticket::Column::FlightId)
        .col(entity::ticket::Column::Row)
        .col(entity::ticket::Column::Seat)
        .unique()
        .to_owned()
}
