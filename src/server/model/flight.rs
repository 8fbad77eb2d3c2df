//! Domain models for the flight lifecycle.
//!
//! A flight's state is never stored directly. It is derived from the `started`, `paused` and
//! `completed` timestamps, and every transition goes through the methods on [`Flight`] which
//! reject moves the lifecycle does not allow:
//!
//! ```text
//! Planning --start--> Active --pause--> PausedActive
//!                       ^                   |
//!                       +------resume-------+
//! Active | PausedActive --complete--> Completed (terminal)
//! ```

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::FlightPhase;
use sea_orm::ActiveEnum;
use std::fmt;

use crate::{
    model::flight::FlightDto,
    server::{error::domain::DomainError, model::operator::Operator},
};

/// Lifecycle state derived from a flight's timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightState {
    /// Created, not yet started.
    Planning,
    /// Started, neither paused nor completed.
    Active,
    /// Started and paused, not completed.
    PausedActive,
    /// Completed. Terminal.
    Completed,
}

impl FlightState {
    /// Derives the state from lifecycle timestamps.
    ///
    /// `completed` wins over everything else, so a stored row with both `paused` and
    /// `completed` set reads as `Completed`.
    pub fn from_timestamps(
        started: Option<DateTime<Utc>>,
        paused: Option<DateTime<Utc>>,
        completed: Option<DateTime<Utc>>,
    ) -> Self {
        match (started, paused, completed) {
            (_, _, Some(_)) => Self::Completed,
            (None, _, None) => Self::Planning,
            (Some(_), Some(_), None) => Self::PausedActive,
            (Some(_), None, None) => Self::Active,
        }
    }
}

impl fmt::Display for FlightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::PausedActive => "Paused",
            Self::Completed => "Completed",
        };

        f.write_str(name)
    }
}

/// Operations that mutate a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightAction {
    Start,
    Pause,
    Resume,
    Complete,
    ReportPosition,
    PlanPayload,
}

impl fmt::Display for FlightAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Complete => "complete",
            Self::ReportPosition => "report position for",
            Self::PlanPayload => "add payloads to",
        };

        f.write_str(name)
    }
}

/// Position and phase reported by the flying client.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionReport {
    pub flight_phase: FlightPhase,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: i32,
    pub ground_speed: i32,
    pub heading: i32,
}

/// A single flight and its lifecycle timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// Unique identifier for the flight.
    pub id: i32,
    /// Flight number without the operator prefix.
    pub flight_number: i32,
    pub origin_icao: String,
    pub destination_icao: String,
    pub alternate_icao: String,
    /// Aircraft flying this flight, if one has been assigned yet.
    pub aircraft_registry: Option<String>,
    pub operator: Operator,
    pub flight_phase: FlightPhase,
    pub created: DateTime<Utc>,
    pub started: Option<DateTime<Utc>>,
    pub paused: Option<DateTime<Utc>>,
    pub completed: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<i32>,
    pub ground_speed: Option<i32>,
    pub heading: Option<i32>,
    pub last_position_report: Option<DateTime<Utc>>,
    /// Airport the flight actually ended at.
    pub landed_at_icao: Option<String>,
    /// Row version the flight was loaded at, used for optimistic concurrency.
    pub version: i32,
}

impl Flight {
    /// Converts an entity model to a flight domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Flight)` - The converted flight
    /// - `Err(DomainError::NoOperatorAssigned | DualOperatorAssigned)` - Stored row breaks
    ///   operator exclusivity
    pub fn from_entity(entity: entity::flight::Model) -> Result<Self, DomainError> {
        let operator = Operator::from_columns(entity.operator_id, entity.operator_airline_icao)?;

        Ok(Self {
            id: entity.id,
            flight_number: entity.flight_number,
            origin_icao: entity.origin_icao,
            destination_icao: entity.destination_icao,
            alternate_icao: entity.alternate_icao,
            aircraft_registry: entity.aircraft_registry,
            operator,
            flight_phase: entity.flight_phase,
            created: entity.created,
            started: entity.started,
            paused: entity.paused,
            completed: entity.completed,
            latitude: entity.latitude,
            longitude: entity.longitude,
            altitude: entity.altitude,
            ground_speed: entity.ground_speed,
            heading: entity.heading,
            last_position_report: entity.last_position_report,
            landed_at_icao: entity.landed_at_icao,
            version: entity.version,
        })
    }

    pub fn state(&self) -> FlightState {
        FlightState::from_timestamps(self.started, self.paused, self.completed)
    }

    /// Whether the flight is started and not completed. Paused flights are still active.
    pub fn is_active(&self) -> bool {
        self.started.is_some() && self.completed.is_none()
    }

    /// Display identifier: airline ICAO prefix plus number for airline flights, the bare
    /// number for flights operated by a user.
    pub fn full_flight_number(&self) -> String {
        match &self.operator {
            Operator::Airline(icao) => format!("{}{}", icao, self.flight_number),
            Operator::User(_) => self.flight_number.to_string(),
        }
    }

    /// Moves a planned flight to `Active`.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        match self.mutable_state()? {
            FlightState::Planning => {
                self.started = Some(now);
                self.paused = None;
                Ok(())
            }
            state => Err(self.invalid_transition(state, FlightAction::Start)),
        }
    }

    /// Pauses an active flight.
    pub fn pause(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        match self.mutable_state()? {
            FlightState::Active => {
                self.paused = Some(now);
                Ok(())
            }
            state => Err(self.invalid_transition(state, FlightAction::Pause)),
        }
    }

    /// Resumes a paused flight.
    pub fn resume(&mut self) -> Result<(), DomainError> {
        match self.mutable_state()? {
            FlightState::PausedActive => {
                self.paused = None;
                Ok(())
            }
            state => Err(self.invalid_transition(state, FlightAction::Resume)),
        }
    }

    /// Completes an active or paused flight at the given airport.
    ///
    /// Clears `paused` so completed flights never carry a pause timestamp.
    pub fn complete(
        &mut self,
        now: DateTime<Utc>,
        landed_at_icao: String,
    ) -> Result<(), DomainError> {
        match self.mutable_state()? {
            FlightState::Active | FlightState::PausedActive => {
                self.completed = Some(now);
                self.paused = None;
                self.landed_at_icao = Some(landed_at_icao);
                Ok(())
            }
            state => Err(self.invalid_transition(state, FlightAction::Complete)),
        }
    }

    /// Records a position report on a started flight.
    pub fn report_position(
        &mut self,
        report: PositionReport,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        match self.mutable_state()? {
            FlightState::Active | FlightState::PausedActive => {
                self.flight_phase = report.flight_phase;
                self.latitude = Some(report.latitude);
                self.longitude = Some(report.longitude);
                self.altitude = Some(report.altitude);
                self.ground_speed = Some(report.ground_speed);
                self.heading = Some(report.heading);
                self.last_position_report = Some(now);
                Ok(())
            }
            state => Err(self.invalid_transition(state, FlightAction::ReportPosition)),
        }
    }

    /// Ensures the flight plan can still be edited.
    pub fn ensure_planning(&self) -> Result<(), DomainError> {
        match self.mutable_state()? {
            FlightState::Planning => Ok(()),
            state => Err(self.invalid_transition(state, FlightAction::PlanPayload)),
        }
    }

    /// Converts the flight domain model to a DTO for API responses.
    pub fn into_dto(self) -> FlightDto {
        let state = self.state().to_string();
        let full_flight_number = self.full_flight_number();
        let (operator_id, operator_airline_icao) = self.operator.to_columns();

        FlightDto {
            id: self.id,
            flight_number: self.flight_number,
            full_flight_number,
            origin_icao: self.origin_icao,
            destination_icao: self.destination_icao,
            alternate_icao: self.alternate_icao,
            aircraft_registry: self.aircraft_registry,
            operator_id,
            operator_airline_icao,
            state,
            flight_phase: self.flight_phase.to_value(),
            created: self.created,
            started: self.started,
            paused: self.paused,
            completed: self.completed,
            last_position_report: self.last_position_report,
            landed_at_icao: self.landed_at_icao,
        }
    }

    /// Returns the current state, rejecting any mutation of a completed flight.
    fn mutable_state(&self) -> Result<FlightState, DomainError> {
        match self.state() {
            FlightState::Completed => Err(DomainError::FlightAlreadyCompleted(self.id)),
            state => Ok(state),
        }
    }

    fn invalid_transition(&self, state: FlightState, action: FlightAction) -> DomainError {
        DomainError::InvalidTransition {
            flight_id: self.id,
            state,
            action,
        }
    }
}

/// Parameters for creating a new flight plan.
#[derive(Debug, Clone)]
pub struct CreateFlightParams {
    pub flight_number: i32,
    pub origin_icao: String,
    pub destination_icao: String,
    pub alternate_icao: String,
    pub aircraft_registry: Option<String>,
    pub operator: Operator,
}
