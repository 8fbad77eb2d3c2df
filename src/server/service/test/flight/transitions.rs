use super::*;

/// Tests pausing and resuming an active flight.
///
/// Expected: Ok with state Paused, then Active again
#[tokio::test]
async fn pauses_and_resumes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);
    service.start(setup.flight.id, &[]).await?;

    let paused = service.pause(setup.flight.id).await?;
    assert_eq!(paused.state, "Paused");
    assert!(paused.paused.is_some());

    let resumed = service.resume(setup.flight.id).await?;
    assert_eq!(resumed.state, "Active");
    assert_eq!(resumed.paused, None);

    Ok(())
}

/// Tests pausing a flight that has not started.
///
/// Expected: Err(InvalidTransition)
#[tokio::test]
async fn rejects_pause_while_planning() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);
    let result = service.pause(setup.flight.id).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::InvalidTransition { .. }))
    ));

    Ok(())
}

/// Tests recording a position report on an active flight.
///
/// Expected: Ok with the reported flight phase
#[tokio::test]
async fn records_position_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);
    service.start(setup.flight.id, &[]).await?;

    let report = PositionReportDto {
        flight_phase: "Cruise".to_string(),
        latitude: 40.1,
        longitude: -100.2,
        altitude: 35000,
        ground_speed: 460,
        heading: 85,
    };
    let flight = service.report_position(setup.flight.id, report).await?;

    assert_eq!(flight.flight_phase, "Cruise");
    assert!(flight.last_position_report.is_some());

    Ok(())
}

/// Tests a position report with an unknown flight phase.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_flight_phase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);
    let report = PositionReportDto {
        flight_phase: "Hovering".to_string(),
        latitude: 0.0,
        longitude: 0.0,
        altitude: 0,
        ground_speed: 0,
        heading: 0,
    };

    let result = service.report_position(setup.flight.id, report).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests adding payloads to a flight plan once the flight has started.
///
/// Expected: Ok while planning, Err(InvalidTransition) after start
#[tokio::test]
async fn plans_payloads_only_before_start() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;
    let first =
        factory::create_payload_at_airport(db, &setup.origin.icao, &setup.destination.icao)
            .await?;
    let second =
        factory::create_payload_at_airport(db, &setup.origin.icao, &setup.destination.icao)
            .await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);

    let planned = service.add_payload(setup.flight.id, first.id).await?;
    assert_eq!(planned.len(), 1);

    service.start(setup.flight.id, &[]).await?;
    let result = service.add_payload(setup.flight.id, second.id).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::InvalidTransition { .. }))
    ));

    Ok(())
}

/// Tests planning payloads that the flight could never load.
///
/// Expected: Err(PayloadNotAvailable) for a payload elsewhere, Err(PayloadAlreadyPlanned)
/// for one held by another open flight, Ok for one already aboard
#[tokio::test]
async fn plans_only_reachable_payloads() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;
    let elsewhere =
        factory::create_payload_at_airport(db, &setup.destination.icao, &setup.origin.icao)
            .await?;
    let claimed =
        factory::create_payload_at_airport(db, &setup.origin.icao, &setup.destination.icao)
            .await?;
    let aboard = factory::payload::PayloadFactory::new(db, &setup.destination.icao)
        .aboard(&setup.aircraft.registry)
        .build()
        .await?;

    let other_flight = factory::flight::FlightFactory::new(
        db,
        &setup.origin.icao,
        &setup.destination.icao,
        &setup.alternate.icao,
    )
    .operator_airline_icao(&setup.airline.icao)
    .build()
    .await?;
    factory::payload::plan_payload(db, other_flight.id, claimed.id).await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);

    let result = service.add_payload(setup.flight.id, elsewhere.id).await;
    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::PayloadNotAvailable { .. }))
    ));

    let result = service.add_payload(setup.flight.id, claimed.id).await;
    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::PayloadAlreadyPlanned { flight_id, .. }))
            if flight_id == other_flight.id
    ));

    let planned = service.add_payload(setup.flight.id, aboard.id).await?;
    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].id, aboard.id);

    Ok(())
}

/// Tests that a flight row holding two operators is reported as an invariant breach.
///
/// Expected: Err(DualOperatorAssigned)
#[tokio::test]
async fn rejects_stored_dual_operator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let airline = factory::create_airline(db).await?;
    let airport = factory::create_airport(db).await?;
    let flight = factory::flight::FlightFactory::new(db, &airport.icao, &airport.icao, &airport.icao)
        .operator_id(user.id)
        .operator_airline_icao(&airline.icao)
        .build()
        .await?;

    let clock = FixedClock(Utc::now() + Duration::seconds(1));
    let service = FlightService::new(db, &clock);
    let result = service.get_by_id(flight.id).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::DualOperatorAssigned))
    ));

    Ok(())
}
