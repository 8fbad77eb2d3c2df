//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and transformed
//! to DTOs at the controller boundary. Derived views such as aircraft status, resolved fuel
//! type and flight state live here as pure functions of the loaded data and an injected `now`.

pub mod aircraft;
pub mod aircraft_type;
pub mod flight;
pub mod flight_start;
pub mod job;
pub mod notification;
pub mod operator;
pub mod payload;
