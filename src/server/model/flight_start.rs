//! Preconditions checked before a flight may start.
//!
//! A failed precondition is not an error. It is reported back as a [`StartBlocked`] value the
//! client can show to the player, who may then retry with the status in the override list.

use entity::sea_orm_active_enums::FuelType;

use crate::model::flight::StartFlightStatus;

/// Facts about the flight, aircraft and origin airport needed by the start checks.
#[derive(Debug, Clone)]
pub struct StartChecks<'a> {
    pub origin_icao: &'a str,
    /// Airport the aircraft is parked at, `None` if it is not at any airport.
    pub aircraft_airport_icao: Option<&'a str>,
    pub origin_has_av_gas: bool,
    pub origin_has_jet_fuel: bool,
    /// Resolved fuel type of the aircraft's type.
    pub fuel_type: FuelType,
    /// IDs of payloads aboard the aircraft that are not part of the flight plan.
    pub non_flight_plan_payloads: &'a [i32],
}

/// First precondition that blocked a start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartBlocked {
    pub status: StartFlightStatus,
    pub message: String,
}

impl StartChecks<'_> {
    /// Runs the checks in order and stops at the first one that fails and is not overridden.
    ///
    /// # Arguments
    /// - `overrides` - Statuses the caller chose to ignore
    ///
    /// # Returns
    /// - `Ok(())` - Every check passed or was overridden
    /// - `Err(StartBlocked)` - The first blocking check with a message for the player
    pub fn evaluate(&self, overrides: &[StartFlightStatus]) -> Result<(), StartBlocked> {
        let checks = [
            (
                StartFlightStatus::AircraftNotAtOrigin,
                self.aircraft_not_at_origin(),
            ),
            (
                StartFlightStatus::OriginDoesntSellAvGas,
                self.missing_fuel(FuelType::AvGas, self.origin_has_av_gas, "AvGas"),
            ),
            (
                StartFlightStatus::OriginDoesntSellJetFuel,
                self.missing_fuel(FuelType::JetFuel, self.origin_has_jet_fuel, "jet fuel"),
            ),
            (
                StartFlightStatus::NonFlightPlanPayloadsFound,
                self.unplanned_payloads(),
            ),
        ];

        for (status, failure) in checks {
            if let Some(message) = failure {
                if !overrides.contains(&status) {
                    return Err(StartBlocked { status, message });
                }
            }
        }

        Ok(())
    }

    fn aircraft_not_at_origin(&self) -> Option<String> {
        if self.aircraft_airport_icao == Some(self.origin_icao) {
            return None;
        }

        Some(match self.aircraft_airport_icao {
            Some(icao) => format!(
                "Aircraft is at {}, not at the flight origin {}",
                icao, self.origin_icao
            ),
            None => format!(
                "Aircraft is not parked at the flight origin {}",
                self.origin_icao
            ),
        })
    }

    fn missing_fuel(&self, fuel_type: FuelType, sold: bool, name: &str) -> Option<String> {
        (self.fuel_type == fuel_type && !sold).then(|| {
            format!(
                "Origin {} does not sell {}, the aircraft can't be refuelled",
                self.origin_icao, name
            )
        })
    }

    fn unplanned_payloads(&self) -> Option<String> {
        match self.non_flight_plan_payloads.len() {
            0 => None,
            count => Some(format!(
                "{} payload(s) aboard are not part of the flight plan",
                count
            )),
        }
    }
}
