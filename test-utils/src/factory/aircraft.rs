//! Aircraft factory for creating test aircraft entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test aircraft with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let aircraft = AircraftFactory::new(&db, aircraft_type.id)
///     .registry("N123OS")
///     .airport_icao(Some("KLAX".to_string()))
///     .build()
///     .await?;
/// ```
pub struct AircraftFactory<'a> {
    db: &'a DatabaseConnection,
    registry: String,
    type_id: i32,
    airport_icao: Option<String>,
    owner_id: Option<i32>,
    airline_owner_icao: Option<String>,
    fuel: f64,
    warping_until: Option<DateTime<Utc>>,
}

impl<'a> AircraftFactory<'a> {
    /// Creates a new AircraftFactory with default values.
    ///
    /// Defaults:
    /// - registry: `"N{id}T"` where id is auto-incremented
    /// - airport_icao: `None`
    /// - owner: none (system owned)
    /// - fuel: `1000.0`
    /// - warping_until: `None`
    pub fn new(db: &'a DatabaseConnection, type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            registry: format!("N{}T", id),
            type_id,
            airport_icao: None,
            owner_id: None,
            airline_owner_icao: None,
            fuel: 1000.0,
            warping_until: None,
        }
    }

    pub fn registry(mut self, registry: impl Into<String>) -> Self {
        self.registry = registry.into();
        self
    }

    pub fn airport_icao(mut self, airport_icao: Option<String>) -> Self {
        self.airport_icao = airport_icao;
        self
    }

    pub fn owner_id(mut self, owner_id: Option<i32>) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn airline_owner_icao(mut self, airline_owner_icao: Option<String>) -> Self {
        self.airline_owner_icao = airline_owner_icao;
        self
    }

    pub fn fuel(mut self, fuel: f64) -> Self {
        self.fuel = fuel;
        self
    }

    pub fn warping_until(mut self, warping_until: Option<DateTime<Utc>>) -> Self {
        self.warping_until = warping_until;
        self
    }

    /// Builds and inserts the aircraft entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::aircraft::Model)` - Created aircraft entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::aircraft::Model, DbErr> {
        entity::aircraft::ActiveModel {
            registry: ActiveValue::Set(self.registry),
            type_id: ActiveValue::Set(self.type_id),
            airport_icao: ActiveValue::Set(self.airport_icao),
            owner_id: ActiveValue::Set(self.owner_id),
            airline_owner_icao: ActiveValue::Set(self.airline_owner_icao),
            name: ActiveValue::Set(None),
            fuel: ActiveValue::Set(self.fuel),
            warping_until: ActiveValue::Set(self.warping_until),
            latitude: ActiveValue::Set(0.0),
            longitude: ActiveValue::Set(0.0),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a system-owned aircraft of the given type, not parked at any airport.
pub async fn create_aircraft(
    db: &DatabaseConnection,
    type_id: i32,
) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(db, type_id).build().await
}
