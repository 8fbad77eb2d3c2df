//! HTTP request handlers.
//!
//! Handlers extract path parameters and JSON bodies, build a service with the shared
//! database pool and clock, and return the DTO the service produced. Missing resources are
//! mapped to `AppError::NotFound` here; everything else is decided by the services.

pub mod aircraft;
pub mod aircraft_type;
pub mod flight;
pub mod job;
pub mod notification;
