use super::*;

/// Tests starting a flight whose aircraft is parked at another airport.
///
/// Verifies the start is blocked with `AircraftNotAtOrigin` and neither the flight nor the
/// aircraft is written.
///
/// Expected: Ok with status AircraftNotAtOrigin, flight still planned
#[tokio::test]
async fn blocks_aircraft_not_at_origin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let origin = factory::airport::AirportFactory::new(db)
        .icao("KLAX")
        .build()
        .await?;
    let parked_at = factory::airport::AirportFactory::new(db)
        .icao("KJFK")
        .build()
        .await?;
    let (_, aircraft) = factory::helpers::create_aircraft_at(db, &parked_at.icao).await?;
    let flight = factory::flight::FlightFactory::new(db, &origin.icao, "KJFK", "KJFK")
        .aircraft_registry(Some(aircraft.registry.clone()))
        .operator_airline_icao(&airline.icao)
        .build()
        .await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);
    let result = service.start(flight.id, &[]).await?;

    assert_eq!(result.status, StartFlightStatus::AircraftNotAtOrigin);
    assert_eq!(result.flight.state, "Planning");

    let stored = Flight::find_by_id(flight.id).one(db).await?.unwrap();
    assert_eq!(stored, flight);
    let stored_aircraft = Aircraft::find_by_id(aircraft.registry.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored_aircraft, aircraft);

    Ok(())
}

/// Tests overriding the aircraft location check while payloads wait at the origin.
///
/// Expected: Ok with status Started, the planned payload still at the origin
#[tokio::test]
async fn override_away_from_origin_leaves_payloads() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let origin = factory::airport::AirportFactory::new(db)
        .icao("KLAX")
        .build()
        .await?;
    let parked_at = factory::airport::AirportFactory::new(db)
        .icao("KJFK")
        .build()
        .await?;
    let (_, aircraft) = factory::helpers::create_aircraft_at(db, &parked_at.icao).await?;
    let flight = factory::flight::FlightFactory::new(db, &origin.icao, "KJFK", "KJFK")
        .aircraft_registry(Some(aircraft.registry.clone()))
        .operator_airline_icao(&airline.icao)
        .build()
        .await?;
    let waiting = factory::create_payload_at_airport(db, &origin.icao, &parked_at.icao).await?;
    factory::payload::plan_payload(db, flight.id, waiting.id).await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);
    let result = service
        .start(flight.id, &[StartFlightStatus::AircraftNotAtOrigin])
        .await?;

    assert_eq!(result.status, StartFlightStatus::Started);

    let stored = Payload::find_by_id(waiting.id).one(db).await?.unwrap();
    assert_eq!(stored.airport_icao, Some(origin.icao.clone()));
    assert_eq!(stored.aircraft_registry, None);
    assert_eq!(stored.version, waiting.version);

    Ok(())
}

/// Tests overriding a missing jet fuel supply at the origin.
///
/// Expected: Ok with status Started despite the origin not selling jet fuel
#[tokio::test]
async fn override_allows_start_without_jet_fuel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let origin = factory::airport::AirportFactory::new(db)
        .has_jet_fuel(false)
        .build()
        .await?;
    let destination = factory::create_airport(db).await?;
    let (_, aircraft) = factory::helpers::create_aircraft_at(db, &origin.icao).await?;
    let flight = factory::flight::FlightFactory::new(
        db,
        &origin.icao,
        &destination.icao,
        &destination.icao,
    )
    .aircraft_registry(Some(aircraft.registry.clone()))
    .operator_airline_icao(&airline.icao)
    .build()
    .await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);

    let blocked = service.start(flight.id, &[]).await?;
    assert_eq!(blocked.status, StartFlightStatus::OriginDoesntSellJetFuel);

    let result = service
        .start(flight.id, &[StartFlightStatus::OriginDoesntSellJetFuel])
        .await?;

    assert_eq!(result.status, StartFlightStatus::Started);
    assert_eq!(result.flight.state, "Active");
    assert_eq!(result.flight.started, Some(clock.0));

    Ok(())
}

/// Tests the side effects of a successful start.
///
/// Verifies planned payloads at the origin are loaded and the aircraft leaves its airport.
///
/// Expected: Ok with payload aboard and aircraft airport cleared
#[tokio::test]
async fn loads_planned_payloads_and_departs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;
    let planned =
        factory::create_payload_at_airport(db, &setup.origin.icao, &setup.destination.icao)
            .await?;
    let left_behind =
        factory::create_payload_at_airport(db, &setup.origin.icao, &setup.destination.icao)
            .await?;
    factory::payload::plan_payload(db, setup.flight.id, planned.id).await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);
    let result = service.start(setup.flight.id, &[]).await?;

    assert_eq!(result.status, StartFlightStatus::Started);

    let planned = Payload::find_by_id(planned.id).one(db).await?.unwrap();
    assert_eq!(planned.aircraft_registry, Some(setup.aircraft.registry.clone()));
    assert_eq!(planned.airport_icao, None);

    let left_behind = Payload::find_by_id(left_behind.id).one(db).await?.unwrap();
    assert_eq!(left_behind.airport_icao, Some(setup.origin.icao.clone()));

    let aircraft = Aircraft::find_by_id(setup.aircraft.registry.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(aircraft.airport_icao, None);
    assert_eq!(aircraft.version, setup.aircraft.version + 1);

    Ok(())
}

/// Tests starting with unplanned payloads aboard.
///
/// Expected: blocked with NonFlightPlanPayloadsFound, started once overridden
#[tokio::test]
async fn blocks_unplanned_payloads_aboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;
    factory::payload::PayloadFactory::new(db, &setup.destination.icao)
        .aboard(&setup.aircraft.registry)
        .build()
        .await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);

    let blocked = service.start(setup.flight.id, &[]).await?;
    assert_eq!(blocked.status, StartFlightStatus::NonFlightPlanPayloadsFound);

    let started = service
        .start(
            setup.flight.id,
            &[StartFlightStatus::NonFlightPlanPayloadsFound],
        )
        .await?;
    assert_eq!(started.status, StartFlightStatus::Started);

    Ok(())
}

/// Tests starting a second flight on an aircraft that is already flying.
///
/// Expected: Err(AircraftHasActiveFlight)
#[tokio::test]
async fn rejects_aircraft_with_active_flight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;
    let active = factory::flight::FlightFactory::new(
        db,
        &setup.origin.icao,
        &setup.destination.icao,
        &setup.alternate.icao,
    )
    .aircraft_registry(Some(setup.aircraft.registry.clone()))
    .operator_airline_icao(&setup.airline.icao)
    .started(Some(Utc::now() - Duration::hours(1)))
    .build()
    .await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);
    let result = service.start(setup.flight.id, &[]).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::AircraftHasActiveFlight { flight_id, .. }))
            if flight_id == active.id
    ));

    Ok(())
}

/// Tests starting a flight whose aircraft is warping.
///
/// Expected: Err(AircraftWarping)
#[tokio::test]
async fn rejects_warping_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let origin = factory::create_airport(db).await?;
    let aircraft_type = factory::create_aircraft_type(db).await?;
    let now = Utc::now();
    let aircraft = factory::aircraft::AircraftFactory::new(db, aircraft_type.id)
        .airport_icao(Some(origin.icao.clone()))
        .warping_until(Some(now + Duration::minutes(5)))
        .build()
        .await?;
    let flight = factory::flight::FlightFactory::new(db, &origin.icao, &origin.icao, &origin.icao)
        .aircraft_registry(Some(aircraft.registry.clone()))
        .operator_airline_icao(&airline.icao)
        .build()
        .await?;

    let clock = FixedClock(now);
    let service = FlightService::new(db, &clock);
    let result = service.start(flight.id, &[]).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::AircraftWarping(_)))
    ));

    Ok(())
}

/// Tests starting an unknown flight.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);
    let result = service.start(999, &[]).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
