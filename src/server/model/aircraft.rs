//! Domain models for aircraft and their operational status.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::FlightPhase;
use sea_orm::ActiveEnum;
use std::fmt;

use crate::server::{
    error::domain::DomainError,
    model::{flight::Flight, operator::Owner},
};

/// Operational status derived from an aircraft's flights and warp timestamp.
#[derive(Debug, Clone, PartialEq)]
pub enum AircraftStatus {
    Idle,
    /// Fast-forwarding, with the time left until `warping_until`.
    Warping { remaining: Duration },
    /// Exactly one unpaused active flight.
    Flying {
        phase: FlightPhase,
        full_flight_number: String,
    },
    /// Exactly one active flight that is paused.
    Paused { full_flight_number: String },
}

impl fmt::Display for AircraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("Idle"),
            Self::Warping { remaining } => {
                // Hours are not wrapped at 24, sub-second remainder is dropped.
                let total = remaining.num_seconds().max(0);
                write!(
                    f,
                    "Warping T-{:02}:{:02}:{:02}",
                    total / 3600,
                    (total % 3600) / 60,
                    total % 60
                )
            }
            Self::Flying {
                phase,
                full_flight_number,
            } => write!(f, "{} ({})", phase.to_value(), full_flight_number),
            Self::Paused { full_flight_number } => write!(f, "Paused ({})", full_flight_number),
        }
    }
}

/// Aircraft domain model.
///
/// `flights` is an explicit relation slot: `None` means the flights were never loaded, which is
/// different from an aircraft that has no flights.
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub registry: String,
    pub type_id: i32,
    /// Airport the aircraft is parked at, `None` while airborne.
    pub airport_icao: Option<String>,
    pub owner: Owner,
    pub name: Option<String>,
    /// Fuel on board in US gallons.
    pub fuel: f64,
    pub warping_until: Option<DateTime<Utc>>,
    pub latitude: f64,
    pub longitude: f64,
    pub version: i32,
    pub flights: Option<Vec<Flight>>,
}

impl Aircraft {
    /// Converts an entity model to an aircraft domain model with its flights not loaded.
    ///
    /// # Returns
    /// - `Ok(Aircraft)` - The converted aircraft
    /// - `Err(DomainError::DualOwnerAssigned)` - Stored row has both a user and airline owner
    pub fn from_entity(entity: entity::aircraft::Model) -> Result<Self, DomainError> {
        let owner = Owner::from_columns(
            &entity.registry,
            entity.owner_id,
            entity.airline_owner_icao,
        )?;

        Ok(Self {
            registry: entity.registry,
            type_id: entity.type_id,
            airport_icao: entity.airport_icao,
            owner,
            name: entity.name,
            fuel: entity.fuel,
            warping_until: entity.warping_until,
            latitude: entity.latitude,
            longitude: entity.longitude,
            version: entity.version,
            flights: None,
        })
    }

    /// Attaches the aircraft's flights, marking the relation as loaded.
    pub fn with_flights(mut self, flights: Vec<Flight>) -> Self {
        self.flights = Some(flights);
        self
    }

    /// # Returns
    /// - `Err(DomainError::RelationNotLoaded)` - Flights were never attached
    pub fn flights(&self) -> Result<&[Flight], DomainError> {
        self.flights
            .as_deref()
            .ok_or(DomainError::RelationNotLoaded("Aircraft.Flights"))
    }

    /// Returns the single started, uncompleted flight of this aircraft, if any.
    ///
    /// # Returns
    /// - `Ok(Some(&Flight))` - Exactly one active flight
    /// - `Ok(None)` - No active flight
    /// - `Err(DomainError::RelationNotLoaded)` - Flights were never attached
    /// - `Err(DomainError::MultipleActiveFlights)` - More than one active flight was found
    pub fn active_flight(&self) -> Result<Option<&Flight>, DomainError> {
        let active: Vec<&Flight> = self.flights()?.iter().filter(|f| f.is_active()).collect();

        match active.as_slice() {
            [] => Ok(None),
            [flight] => Ok(Some(flight)),
            many => Err(DomainError::MultipleActiveFlights {
                registry: self.registry.clone(),
                flight_ids: many.iter().map(|f| f.id).collect(),
            }),
        }
    }

    /// Whether the aircraft has whole seconds of warp left at `now`.
    pub fn is_warping(&self, now: DateTime<Utc>) -> bool {
        self.warp_remaining(now).is_some()
    }

    /// Derives the operational status at `now`.
    ///
    /// An active flight takes precedence over warping.
    pub fn status(&self, now: DateTime<Utc>) -> Result<AircraftStatus, DomainError> {
        if let Some(flight) = self.active_flight()? {
            let full_flight_number = flight.full_flight_number();

            return Ok(match flight.paused {
                Some(_) => AircraftStatus::Paused { full_flight_number },
                None => AircraftStatus::Flying {
                    phase: flight.flight_phase,
                    full_flight_number,
                },
            });
        }

        Ok(match self.warp_remaining(now) {
            Some(remaining) => AircraftStatus::Warping { remaining },
            None => AircraftStatus::Idle,
        })
    }

    /// Sets the aircraft warping until `now + duration`.
    ///
    /// # Returns
    /// - `Ok(())` - Warp started
    /// - `Err(DomainError::AircraftHasActiveFlight)` - Aircraft is flying
    pub fn start_warp(&mut self, now: DateTime<Utc>, duration: Duration) -> Result<(), DomainError> {
        if let Some(flight) = self.active_flight()? {
            return Err(DomainError::AircraftHasActiveFlight {
                registry: self.registry.clone(),
                flight_id: flight.id,
            });
        }

        self.warping_until = Some(now + duration);
        Ok(())
    }

    fn warp_remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        let remaining = self.warping_until? - now;

        (remaining.num_seconds() > 0).then_some(remaining)
    }
}
