//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Applying the flight lifecycle, start checks and warp rules
//! - **Orchestration**: Loading relations explicitly and coordinating repositories
//! - **Transaction Management**: Running multi-entity transitions atomically
//!
//! Services take the current time from an injected [`Clock`](crate::server::util::clock::Clock)
//! so every derivation is reproducible in tests.

pub mod aircraft;
pub mod aircraft_type;
pub mod cleanup;
pub mod flight;
pub mod job;
pub mod notification;

#[cfg(test)]
mod test;
