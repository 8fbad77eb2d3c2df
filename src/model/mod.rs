//! Data transfer objects exchanged with game clients over the JSON API.

pub mod aircraft;
pub mod aircraft_type;
pub mod api;
pub mod flight;
pub mod job;
pub mod notification;
