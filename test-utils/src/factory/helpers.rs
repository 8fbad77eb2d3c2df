//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules, including ID
//! generation and convenience methods for creating entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a jet aircraft type and a system-owned aircraft parked at `airport_icao`.
///
/// # Returns
/// - `Ok((aircraft_type, aircraft))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_aircraft_at(
    db: &DatabaseConnection,
    airport_icao: &str,
) -> Result<(entity::aircraft_type::Model, entity::aircraft::Model), DbErr> {
    let aircraft_type = crate::factory::aircraft_type::create_aircraft_type(db).await?;
    let aircraft = crate::factory::aircraft::AircraftFactory::new(db, aircraft_type.id)
        .airport_icao(Some(airport_icao.to_string()))
        .build()
        .await?;

    Ok((aircraft_type, aircraft))
}

/// Creates the full setup for a planned flight.
///
/// This is a convenience method that creates:
/// 1. Airline (as operator)
/// 2. Origin, destination and alternate airports
/// 3. Jet aircraft type
/// 4. Aircraft parked at the origin
/// 5. Planned flight operated by the airline
///
/// # Returns
/// - `Ok(FlightSetup)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_dependencies(
    db: &DatabaseConnection,
) -> Result<FlightSetup, DbErr> {
    let airline = crate::factory::airline::create_airline(db).await?;
    let origin = crate::factory::airport::create_airport(db).await?;
    let destination = crate::factory::airport::create_airport(db).await?;
    let alternate = crate::factory::airport::create_airport(db).await?;
    let (aircraft_type, aircraft) = create_aircraft_at(db, &origin.icao).await?;
    let flight = crate::factory::flight::FlightFactory::new(
        db,
        &origin.icao,
        &destination.icao,
        &alternate.icao,
    )
    .aircraft_registry(Some(aircraft.registry.clone()))
    .operator_airline_icao(&airline.icao)
    .build()
    .await?;

    Ok(FlightSetup {
        airline,
        origin,
        destination,
        alternate,
        aircraft_type,
        aircraft,
        flight,
    })
}

/// Entities created by [`create_flight_with_dependencies`].
pub struct FlightSetup {
    pub airline: entity::airline::Model,
    pub origin: entity::airport::Model,
    pub destination: entity::airport::Model,
    pub alternate: entity::airport::Model,
    pub aircraft_type: entity::aircraft_type::Model,
    pub aircraft: entity::aircraft::Model,
    pub flight: entity::flight::Model,
}
