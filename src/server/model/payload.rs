//! Payload domain model.

use crate::{model::job::PayloadDto, server::error::domain::DomainError};

/// Where a payload currently is: on the ground or aboard an aircraft, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadLocation {
    Airport(String),
    Aircraft(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub id: i32,
    pub location: PayloadLocation,
    pub destination_icao: String,
    pub description: String,
    /// Weight in lbs.
    pub weight: f64,
    pub job_id: Option<i32>,
    pub version: i32,
}

impl Payload {
    /// Converts an entity model to a payload domain model.
    ///
    /// # Returns
    /// - `Ok(Payload)` - The converted payload
    /// - `Err(DomainError::InvalidPayloadLocation)` - Stored row is at both or neither location
    pub fn from_entity(entity: entity::payload::Model) -> Result<Self, DomainError> {
        let location = match (entity.airport_icao, entity.aircraft_registry) {
            (Some(icao), None) => PayloadLocation::Airport(icao),
            (None, Some(registry)) => PayloadLocation::Aircraft(registry),
            _ => return Err(DomainError::InvalidPayloadLocation(entity.id)),
        };

        Ok(Self {
            id: entity.id,
            location,
            destination_icao: entity.destination_icao,
            description: entity.description,
            weight: entity.weight,
            job_id: entity.job_id,
            version: entity.version,
        })
    }

    pub fn is_at_airport(&self, icao: &str) -> bool {
        matches!(&self.location, PayloadLocation::Airport(at) if at == icao)
    }

    pub fn is_aboard(&self, registry: &str) -> bool {
        matches!(&self.location, PayloadLocation::Aircraft(at) if at == registry)
    }

    /// Splits the location back into `(airport_icao, aircraft_registry)` columns.
    pub fn location_columns(&self) -> (Option<String>, Option<String>) {
        match &self.location {
            PayloadLocation::Airport(icao) => (Some(icao.clone()), None),
            PayloadLocation::Aircraft(registry) => (None, Some(registry.clone())),
        }
    }

    pub fn into_dto(self) -> PayloadDto {
        let (airport_icao, aircraft_registry) = self.location_columns();

        PayloadDto {
            id: self.id,
            airport_icao,
            aircraft_registry,
            destination_icao: self.destination_icao,
            description: self.description,
            weight: self.weight,
        }
    }
}
