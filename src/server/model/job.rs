use chrono::{DateTime, Utc};

use crate::{
    model::job::JobDto,
    server::{
        error::domain::DomainError,
        model::{operator::Operator, payload::Payload},
    },
};

/// A transport contract offered at an airport.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: i32,
    pub operator: Operator,
    pub origin_icao: String,
    pub job_type: String,
    /// Value in SkyBucks.
    pub value: i32,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub payloads: Vec<Payload>,
}

impl Job {
    pub fn from_entity(
        entity: entity::job::Model,
        payloads: Vec<Payload>,
    ) -> Result<Self, DomainError> {
        let operator = Operator::from_columns(entity.operator_id, entity.operator_airline_icao)?;

        Ok(Self {
            id: entity.id,
            operator,
            origin_icao: entity.origin_icao,
            job_type: entity.job_type,
            value: entity.value,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
            payloads,
        })
    }

    pub fn into_dto(self) -> JobDto {
        let (operator_id, operator_airline_icao) = self.operator.to_columns();

        JobDto {
            id: self.id,
            origin_icao: self.origin_icao,
            job_type: self.job_type,
            value: self.value,
            operator_id,
            operator_airline_icao,
            expires_at: self.expires_at,
            payloads: self.payloads.into_iter().map(Payload::into_dto).collect(),
        }
    }
}

/// Parameters for creating a job.
#[derive(Debug, Clone)]
pub struct CreateJobParams {
    pub operator: Operator,
    pub origin_icao: String,
    pub job_type: String,
    pub value: i32,
    pub expires_at: DateTime<Utc>,
    pub payloads: Vec<CreatePayloadParams>,
}

/// Cargo created at the job's origin airport.
#[derive(Debug, Clone)]
pub struct CreatePayloadParams {
    pub destination_icao: String,
    pub description: String,
    pub weight: f64,
}
