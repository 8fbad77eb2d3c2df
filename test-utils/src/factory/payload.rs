//! Payload factory for creating test payload entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PayloadFactory<'a> {
    db: &'a DatabaseConnection,
    airport_icao: Option<String>,
    aircraft_registry: Option<String>,
    destination_icao: String,
    description: String,
    weight: f64,
    job_id: Option<i32>,
}

impl<'a> PayloadFactory<'a> {
    /// Creates a payload factory with no location set. Use `at_airport` or `aboard` to place
    /// the payload.
    pub fn new(db: &'a DatabaseConnection, destination_icao: &str) -> Self {
        let id = next_id();
        Self {
            db,
            airport_icao: None,
            aircraft_registry: None,
            destination_icao: destination_icao.to_string(),
            description: format!("Cargo {}", id),
            weight: 100.0,
            job_id: None,
        }
    }

    pub fn at_airport(mut self, icao: &str) -> Self {
        self.airport_icao = Some(icao.to_string());
        self.aircraft_registry = None;
        self
    }

    pub fn aboard(mut self, registry: &str) -> Self {
        self.aircraft_registry = Some(registry.to_string());
        self.airport_icao = None;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn job_id(mut self, job_id: Option<i32>) -> Self {
        self.job_id = job_id;
        self
    }

    pub async fn build(self) -> Result<entity::payload::Model, DbErr> {
        entity::payload::ActiveModel {
            id: ActiveValue::NotSet,
            airport_icao: ActiveValue::Set(self.airport_icao),
            aircraft_registry: ActiveValue::Set(self.aircraft_registry),
            destination_icao: ActiveValue::Set(self.destination_icao),
            description: ActiveValue::Set(self.description),
            weight: ActiveValue::Set(self.weight),
            job_id: ActiveValue::Set(self.job_id),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_payload_at_airport(
    db: &DatabaseConnection,
    airport_icao: &str,
    destination_icao: &str,
) -> Result<entity::payload::Model, DbErr> {
    PayloadFactory::new(db, destination_icao)
        .at_airport(airport_icao)
        .build()
        .await
}

/// Adds the payload to the flight's plan.
pub async fn plan_payload(
    db: &DatabaseConnection,
    flight_id: i32,
    payload_id: i32,
) -> Result<entity::flight_payload::Model, DbErr> {
    entity::flight_payload::ActiveModel {
        flight_id: ActiveValue::Set(flight_id),
        payload_id: ActiveValue::Set(payload_id),
    }
    .insert(db)
    .await
}
