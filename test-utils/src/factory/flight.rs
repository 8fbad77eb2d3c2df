//! Flight factory for creating test flight entities.
//!
//! Flights are created in the planning state by default. Use the timestamp setters to place a
//! flight directly in another lifecycle state.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::FlightPhase;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    flight_number: i32,
    origin_icao: String,
    destination_icao: String,
    alternate_icao: String,
    aircraft_registry: Option<String>,
    operator_id: Option<i32>,
    operator_airline_icao: Option<String>,
    flight_phase: FlightPhase,
    started: Option<DateTime<Utc>>,
    paused: Option<DateTime<Utc>>,
    completed: Option<DateTime<Utc>>,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - flight_number: auto-incremented
    /// - aircraft_registry: `None`
    /// - operator: none, set one with `operator_id` or `operator_airline_icao`
    /// - flight_phase: `Briefing`
    /// - started / paused / completed: `None`
    pub fn new(
        db: &'a DatabaseConnection,
        origin_icao: &str,
        destination_icao: &str,
        alternate_icao: &str,
    ) -> Self {
        Self {
            db,
            flight_number: next_id() as i32,
            origin_icao: origin_icao.to_string(),
            destination_icao: destination_icao.to_string(),
            alternate_icao: alternate_icao.to_string(),
            aircraft_registry: None,
            operator_id: None,
            operator_airline_icao: None,
            flight_phase: FlightPhase::Briefing,
            started: None,
            paused: None,
            completed: None,
        }
    }

    pub fn flight_number(mut self, flight_number: i32) -> Self {
        self.flight_number = flight_number;
        self
    }

    pub fn aircraft_registry(mut self, aircraft_registry: Option<String>) -> Self {
        self.aircraft_registry = aircraft_registry;
        self
    }

    pub fn operator_id(mut self, operator_id: i32) -> Self {
        self.operator_id = Some(operator_id);
        self
    }

    pub fn operator_airline_icao(mut self, icao: impl Into<String>) -> Self {
        self.operator_airline_icao = Some(icao.into());
        self
    }

    pub fn flight_phase(mut self, flight_phase: FlightPhase) -> Self {
        self.flight_phase = flight_phase;
        self
    }

    pub fn started(mut self, started: Option<DateTime<Utc>>) -> Self {
        self.started = started;
        self
    }

    pub fn paused(mut self, paused: Option<DateTime<Utc>>) -> Self {
        self.paused = paused;
        self
    }

    pub fn completed(mut self, completed: Option<DateTime<Utc>>) -> Self {
        self.completed = completed;
        self
    }

    /// Builds and inserts the flight entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - Created flight entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            id: ActiveValue::NotSet,
            flight_number: ActiveValue::Set(self.flight_number),
            origin_icao: ActiveValue::Set(self.origin_icao),
            destination_icao: ActiveValue::Set(self.destination_icao),
            alternate_icao: ActiveValue::Set(self.alternate_icao),
            aircraft_registry: ActiveValue::Set(self.aircraft_registry),
            operator_id: ActiveValue::Set(self.operator_id),
            operator_airline_icao: ActiveValue::Set(self.operator_airline_icao),
            flight_phase: ActiveValue::Set(self.flight_phase),
            created: ActiveValue::Set(Utc::now()),
            started: ActiveValue::Set(self.started),
            paused: ActiveValue::Set(self.paused),
            completed: ActiveValue::Set(self.completed),
            latitude: ActiveValue::Set(None),
            longitude: ActiveValue::Set(None),
            altitude: ActiveValue::Set(None),
            ground_speed: ActiveValue::Set(None),
            heading: ActiveValue::Set(None),
            last_position_report: ActiveValue::Set(None),
            landed_at_icao: ActiveValue::Set(None),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planned flight operated by the given airline, without an aircraft.
pub async fn create_flight(
    db: &DatabaseConnection,
    origin_icao: &str,
    destination_icao: &str,
    airline_icao: &str,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, origin_icao, destination_icao, destination_icao)
        .operator_airline_icao(airline_icao)
        .build()
        .await
}
