//! Airport factory for creating test airport entities.
//!
//! Airports default to selling both AvGas and jet fuel so fuel start checks pass unless a
//! test opts out.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airports with customizable fields.
pub struct AirportFactory<'a> {
    db: &'a DatabaseConnection,
    icao: String,
    name: String,
    has_av_gas: bool,
    has_jet_fuel: bool,
    is_closed: bool,
}

impl<'a> AirportFactory<'a> {
    /// Creates a new AirportFactory with default values.
    ///
    /// Defaults:
    /// - icao: `"T{id}"` where id is auto-incremented
    /// - name: `"Airport {id}"`
    /// - has_av_gas / has_jet_fuel: `true`
    /// - is_closed: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            icao: format!("T{}", id),
            name: format!("Airport {}", id),
            has_av_gas: true,
            has_jet_fuel: true,
            is_closed: false,
        }
    }

    pub fn icao(mut self, icao: impl Into<String>) -> Self {
        self.icao = icao.into();
        self
    }

    pub fn has_av_gas(mut self, has_av_gas: bool) -> Self {
        self.has_av_gas = has_av_gas;
        self
    }

    pub fn has_jet_fuel(mut self, has_jet_fuel: bool) -> Self {
        self.has_jet_fuel = has_jet_fuel;
        self
    }

    pub fn is_closed(mut self, is_closed: bool) -> Self {
        self.is_closed = is_closed;
        self
    }

    /// Builds and inserts the airport entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::airport::Model)` - Created airport entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::airport::Model, DbErr> {
        entity::airport::ActiveModel {
            icao: ActiveValue::Set(self.icao),
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            latitude: ActiveValue::Set(0.0),
            longitude: ActiveValue::Set(0.0),
            altitude: ActiveValue::Set(0),
            has_av_gas: ActiveValue::Set(self.has_av_gas),
            has_jet_fuel: ActiveValue::Set(self.has_jet_fuel),
            is_closed: ActiveValue::Set(self.is_closed),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airport with default values.
pub async fn create_airport(db: &DatabaseConnection) -> Result<entity::airport::Model, DbErr> {
    AirportFactory::new(db).build().await
}
