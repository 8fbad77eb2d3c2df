use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AircraftDto {
    pub registry: String,
    pub name: Option<String>,
    pub type_id: i32,
    pub type_name: String,
    pub airport_icao: Option<String>,
    pub owner_name: String,
    pub fuel: f64,
    pub fuel_type: String,
    pub fuel_weight_per_gallon: f64,
    /// Human readable operational status, e.g. `Cruise (OSK123)` or `Idle`
    pub status: String,
    pub warping_until: Option<DateTime<Utc>>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct StartWarpDto {
    /// How far to fast-forward the aircraft, in seconds
    pub duration_seconds: i64,
}
