use super::*;

/// Tests completing an active flight at its destination.
///
/// Verifies the aircraft is set down at the destination and payloads for that airport are
/// unloaded while others stay aboard.
///
/// Expected: Ok with flight completed, aircraft parked and payload unloaded
#[tokio::test]
async fn completes_and_unloads_at_destination() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;
    let delivered =
        factory::create_payload_at_airport(db, &setup.origin.icao, &setup.destination.icao)
            .await?;
    let onward = factory::payload::PayloadFactory::new(db, &setup.alternate.icao)
        .at_airport(&setup.origin.icao)
        .build()
        .await?;
    factory::payload::plan_payload(db, setup.flight.id, delivered.id).await?;
    factory::payload::plan_payload(db, setup.flight.id, onward.id).await?;

    let clock = FixedClock(Utc::now());
    let service = FlightService::new(db, &clock);
    service.start(setup.flight.id, &[]).await?;
    let completed = service
        .complete(setup.flight.id, CompleteFlightDto::default())
        .await?;

    assert_eq!(completed.state, "Completed");
    assert_eq!(completed.landed_at_icao, Some(setup.destination.icao.clone()));
    assert_eq!(completed.paused, None);

    let aircraft = Aircraft::find_by_id(setup.aircraft.registry.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(aircraft.airport_icao, Some(setup.destination.icao.clone()));

    let delivered = Payload::find_by_id(delivered.id).one(db).await?.unwrap();
    assert_eq!(delivered.airport_icao, Some(setup.destination.icao.clone()));
    assert_eq!(delivered.aircraft_registry, None);

    let onward = Payload::find_by_id(onward.id).one(db).await?.unwrap();
    assert_eq!(onward.aircraft_registry, Some(setup.aircraft.registry.clone()));

    Ok(())
}

/// Tests completing a paused flight at the alternate airport.
///
/// Expected: Ok with pause cleared and landing airport recorded
#[tokio::test]
async fn completes_paused_flight_at_alternate() -> Result<(), AppError> {
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
    service.pause(setup.flight.id).await?;

    let completed = service
        .complete(
            setup.flight.id,
            CompleteFlightDto {
                landed_at_icao: Some(setup.alternate.icao.clone()),
            },
        )
        .await?;

    assert_eq!(completed.state, "Completed");
    assert_eq!(completed.paused, None);
    assert_eq!(completed.landed_at_icao, Some(setup.alternate.icao.clone()));

    Ok(())
}

/// Tests completing a flight twice.
///
/// Expected: Err(FlightAlreadyCompleted) on the second call
#[tokio::test]
async fn rejects_second_completion() -> Result<(), AppError> {
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
    service
        .complete(setup.flight.id, CompleteFlightDto::default())
        .await?;

    let result = service
        .complete(setup.flight.id, CompleteFlightDto::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::FlightAlreadyCompleted(id))) if id == setup.flight.id
    ));

    Ok(())
}
