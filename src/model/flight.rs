use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result codes of a flight start attempt.
///
/// Every code other than `Started` names a failed precondition. Clients may send
/// these codes back in [`StartFlightDto::overrides`] to bypass the matching check.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum StartFlightStatus {
    Started,
    AircraftNotAtOrigin,
    OriginDoesntSellAvGas,
    OriginDoesntSellJetFuel,
    NonFlightPlanPayloadsFound,
}

impl fmt::Display for StartFlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Started => "Started",
            Self::AircraftNotAtOrigin => "AircraftNotAtOrigin",
            Self::OriginDoesntSellAvGas => "OriginDoesntSellAvGas",
            Self::OriginDoesntSellJetFuel => "OriginDoesntSellJetFuel",
            Self::NonFlightPlanPayloadsFound => "NonFlightPlanPayloadsFound",
        };

        f.write_str(name)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct FlightDto {
    pub id: i32,
    pub flight_number: i32,
    pub full_flight_number: String,
    pub origin_icao: String,
    pub destination_icao: String,
    pub alternate_icao: String,
    pub aircraft_registry: Option<String>,
    pub operator_id: Option<i32>,
    pub operator_airline_icao: Option<String>,
    /// One of `Planning`, `Active`, `Paused` or `Completed`
    pub state: String,
    pub flight_phase: String,
    pub created: DateTime<Utc>,
    pub started: Option<DateTime<Utc>>,
    pub paused: Option<DateTime<Utc>>,
    pub completed: Option<DateTime<Utc>>,
    pub last_position_report: Option<DateTime<Utc>>,
    pub landed_at_icao: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct StartFlightDto {
    #[serde(default)]
    pub overrides: Vec<StartFlightStatus>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct StartFlightResultDto {
    pub status: StartFlightStatus,
    pub message: String,
    pub flight: FlightDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct CompleteFlightDto {
    /// Airport the aircraft landed at, defaults to the planned destination
    pub landed_at_icao: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PositionReportDto {
    pub flight_phase: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: i32,
    pub ground_speed: i32,
    pub heading: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateFlightDto {
    pub flight_number: i32,
    pub origin_icao: String,
    pub destination_icao: String,
    pub alternate_icao: String,
    pub aircraft_registry: Option<String>,
    /// Exactly one of `operator_id` and `operator_airline_icao` must be set
    pub operator_id: Option<i32>,
    pub operator_airline_icao: Option<String>,
}
