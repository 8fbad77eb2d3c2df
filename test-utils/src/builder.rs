use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to create the
/// configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Airport, Runway};
///
/// let test = TestBuilder::new()
///     .with_table(Airport)
///     .with_table(Runway)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys after their
    /// referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for aircraft and aircraft type operations.
    ///
    /// Adds, in dependency order: Airline, User, Airport, AircraftType, Aircraft.
    pub fn with_aircraft_tables(self) -> Self {
        self.with_table(Airline)
            .with_table(User)
            .with_table(Airport)
            .with_table(AircraftType)
            .with_table(Aircraft)
    }

    /// Adds the tables needed for flight operations.
    ///
    /// Equivalent to `with_aircraft_tables()` followed by Flight, Job, Payload and
    /// FlightPayload.
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
        self.with_aircraft_tables()
            .with_table(Flight)
            .with_table(Job)
            .with_table(Payload)
            .with_table(FlightPayload)
    }

    /// Adds every table of the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_flight_tables()
            .with_table(Runway)
            .with_table(Approach)
            .with_table(Notification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
