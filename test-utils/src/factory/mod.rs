//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let airport = factory::create_airport(&db).await?;
//!     let (aircraft_type, aircraft) =
//!         factory::helpers::create_aircraft_at(&db, &airport.icao).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let airport = factory::airport::AirportFactory::new(&db)
//!     .icao("KLAX")
//!     .has_jet_fuel(false)
//!     .build()
//!     .await?;
//! ```

pub mod aircraft;
pub mod aircraft_type;
pub mod airline;
pub mod airport;
pub mod flight;
pub mod helpers;
pub mod job;
pub mod notification;
pub mod payload;
pub mod user;

pub use aircraft::create_aircraft;
pub use aircraft_type::create_aircraft_type;
pub use airline::create_airline;
pub use airport::create_airport;
pub use flight::create_flight;
pub use job::create_job;
pub use notification::create_notification;
pub use payload::create_payload_at_airport;
pub use user::create_user;
