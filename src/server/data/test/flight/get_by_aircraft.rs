use super::*;

/// Tests loading the flights of one aircraft.
///
/// Verifies flights of other aircraft are not returned.
///
/// Expected: Ok with only the aircraft's flights, oldest first
#[tokio::test]
async fn returns_only_flights_of_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;
    let second = factory::flight::FlightFactory::new(
        db,
        &setup.origin.icao,
        &setup.destination.icao,
        &setup.alternate.icao,
    )
    .aircraft_registry(Some(setup.aircraft.registry.clone()))
    .operator_airline_icao(&setup.airline.icao)
    .build()
    .await?;
    factory::create_flight(db, &setup.origin.icao, &setup.destination.icao, &setup.airline.icao)
        .await?;

    let repo = FlightRepository::new(db);
    let flights = repo.get_by_aircraft(&setup.aircraft.registry).await?;

    let ids: Vec<i32> = flights.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![setup.flight.id, second.id]);

    Ok(())
}

/// Tests loading flights of an aircraft that never flew.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unused_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);

    assert!(repo.get_by_aircraft("N000XX").await?.is_empty());

    Ok(())
}
