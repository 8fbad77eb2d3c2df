use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct JobDto {
    pub id: i32,
    pub origin_icao: String,
    pub job_type: String,
    /// Job value in SkyBucks
    pub value: i32,
    pub operator_id: Option<i32>,
    pub operator_airline_icao: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub payloads: Vec<PayloadDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PayloadDto {
    pub id: i32,
    pub airport_icao: Option<String>,
    pub aircraft_registry: Option<String>,
    pub destination_icao: String,
    pub description: String,
    pub weight: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateJobDto {
    /// Exactly one of `operator_id` and `operator_airline_icao` must be set
    pub operator_id: Option<i32>,
    pub operator_airline_icao: Option<String>,
    pub origin_icao: String,
    pub job_type: String,
    pub value: i32,
    pub expires_at: DateTime<Utc>,
    pub payloads: Vec<CreatePayloadDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreatePayloadDto {
    pub destination_icao: String,
    pub description: String,
    pub weight: f64,
}
