use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::FlightPhase;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{domain::DomainError, AppError},
    service::aircraft::AircraftService,
    util::clock::FixedClock,
};

/// Tests the status of a parked aircraft without flights or warp.
///
/// Expected: Ok with status "Idle" and the system as owner
#[tokio::test]
async fn reports_idle_system_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = factory::create_airport(db).await?;
    let (_, aircraft) = factory::helpers::create_aircraft_at(db, &airport.icao).await?;

    let clock = FixedClock(Utc::now());
    let dto = AircraftService::new(db, &clock)
        .get_by_registry(&aircraft.registry)
        .await?
        .unwrap();

    assert_eq!(dto.status, "Idle");
    assert_eq!(dto.owner_name, "System");
    assert_eq!(dto.fuel_type, "JetFuel");
    assert_eq!(dto.fuel_weight_per_gallon, 6.7);

    Ok(())
}

/// Tests the status of an aircraft flying an airline flight.
///
/// Expected: Ok with status "Climb (<airline><number>)"
#[tokio::test]
async fn reports_flying_with_full_flight_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let airline = factory::airline::AirlineFactory::new(db)
        .icao("OSK")
        .build()
        .await?;
    let airport = factory::create_airport(db).await?;
    let (_, aircraft) = factory::helpers::create_aircraft_at(db, &airport.icao).await?;
    factory::flight::FlightFactory::new(db, &airport.icao, &airport.icao, &airport.icao)
        .flight_number(123)
        .aircraft_registry(Some(aircraft.registry.clone()))
        .operator_airline_icao(&airline.icao)
        .flight_phase(FlightPhase::Climb)
        .started(Some(now))
        .build()
        .await?;

    let clock = FixedClock(now);
    let dto = AircraftService::new(db, &clock)
        .get_by_registry(&aircraft.registry)
        .await?
        .unwrap();

    assert_eq!(dto.status, "Climb (OSK123)");

    Ok(())
}

/// Tests the status of an aircraft whose active flight is paused.
///
/// Expected: Ok with status "Paused (<airline><number>)"
#[tokio::test]
async fn reports_paused_flight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let airline = factory::airline::AirlineFactory::new(db)
        .icao("OSK")
        .build()
        .await?;
    let airport = factory::create_airport(db).await?;
    let (_, aircraft) = factory::helpers::create_aircraft_at(db, &airport.icao).await?;
    factory::flight::FlightFactory::new(db, &airport.icao, &airport.icao, &airport.icao)
        .flight_number(123)
        .aircraft_registry(Some(aircraft.registry.clone()))
        .operator_airline_icao(&airline.icao)
        .started(Some(now - Duration::hours(1)))
        .paused(Some(now))
        .build()
        .await?;

    let clock = FixedClock(now);
    let dto = AircraftService::new(db, &clock)
        .get_by_registry(&aircraft.registry)
        .await?
        .unwrap();

    assert_eq!(dto.status, "Paused (OSK123)");

    Ok(())
}

/// Tests the status of a warping aircraft against the injected clock.
///
/// Expected: Ok with status "Warping T-00:01:30"
#[tokio::test]
async fn reports_remaining_warp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let airport = factory::create_airport(db).await?;
    let aircraft_type = factory::create_aircraft_type(db).await?;
    let aircraft = factory::aircraft::AircraftFactory::new(db, aircraft_type.id)
        .airport_icao(Some(airport.icao.clone()))
        .warping_until(Some(now + Duration::seconds(90)))
        .build()
        .await?;

    let clock = FixedClock(now);
    let dto = AircraftService::new(db, &clock)
        .get_by_registry(&aircraft.registry)
        .await?
        .unwrap();

    assert_eq!(dto.status, "Warping T-00:01:30");

    Ok(())
}

/// Tests that two active flights on one aircraft are reported as an invariant breach.
///
/// Expected: Err(MultipleActiveFlights)
#[tokio::test]
async fn fails_on_multiple_active_flights() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let airline = factory::create_airline(db).await?;
    let airport = factory::create_airport(db).await?;
    let (_, aircraft) = factory::helpers::create_aircraft_at(db, &airport.icao).await?;
    for _ in 0..2 {
        factory::flight::FlightFactory::new(db, &airport.icao, &airport.icao, &airport.icao)
            .aircraft_registry(Some(aircraft.registry.clone()))
            .operator_airline_icao(&airline.icao)
            .started(Some(now))
            .build()
            .await?;
    }

    let clock = FixedClock(now);
    let result = AircraftService::new(db, &clock)
        .get_by_registry(&aircraft.registry)
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::MultipleActiveFlights { .. }))
    ));

    Ok(())
}

/// Tests resolving the owner name of a user-owned aircraft.
///
/// Expected: Ok with the user's name as owner
#[tokio::test]
async fn resolves_user_owner_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .user_name("skyhawk")
        .build()
        .await?;
    let aircraft_type = factory::create_aircraft_type(db).await?;
    let aircraft = factory::aircraft::AircraftFactory::new(db, aircraft_type.id)
        .owner_id(Some(user.id))
        .build()
        .await?;

    let clock = FixedClock(Utc::now());
    let dto = AircraftService::new(db, &clock)
        .get_by_registry(&aircraft.registry)
        .await?
        .unwrap();

    assert_eq!(dto.owner_name, "skyhawk");

    Ok(())
}

/// Tests getting an aircraft that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_registry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clock = FixedClock(Utc::now());
    let result = AircraftService::new(db, &clock)
        .get_by_registry("N0NE")
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests starting a warp on an idle aircraft.
///
/// Expected: Ok with a warp deadline relative to the clock and a bumped version
#[tokio::test]
async fn starts_warp_on_idle_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = factory::create_airport(db).await?;
    let (_, aircraft) = factory::helpers::create_aircraft_at(db, &airport.icao).await?;

    let clock = FixedClock(Utc::now());
    let dto = AircraftService::new(db, &clock)
        .start_warp(&aircraft.registry, 600)
        .await?;

    assert_eq!(dto.status, "Warping T-00:10:00");

    let stored = entity::prelude::Aircraft::find_by_id(aircraft.registry.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.version, aircraft.version + 1);
    assert!(stored.warping_until.is_some());

    Ok(())
}

/// Tests starting a warp with a non-positive duration.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_non_positive_warp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = factory::create_airport(db).await?;
    let (_, aircraft) = factory::helpers::create_aircraft_at(db, &airport.icao).await?;

    let clock = FixedClock(Utc::now());
    let result = AircraftService::new(db, &clock)
        .start_warp(&aircraft.registry, 0)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests starting a warp while the aircraft is flying.
///
/// Expected: Err(AircraftHasActiveFlight)
#[tokio::test]
async fn rejects_warp_while_flying() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;
    let clock = FixedClock(Utc::now());
    crate::server::service::flight::FlightService::new(db, &clock)
        .start(setup.flight.id, &[])
        .await?;

    let result = AircraftService::new(db, &clock)
        .start_warp(&setup.aircraft.registry, 600)
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::AircraftHasActiveFlight { flight_id, .. }))
            if flight_id == setup.flight.id
    ));

    Ok(())
}
