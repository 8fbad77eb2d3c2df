//! OpenSky World backend.
//!
//! Entity persistence, the aircraft/flight domain model, and the HTTP API that
//! exposes derived views (aircraft status, fuel characteristics, owner names)
//! to game clients.

pub mod model;
pub mod server;
