use super::*;

/// Tests persisting a lifecycle transition.
///
/// Expected: Ok with the start timestamp stored and version incremented
#[tokio::test]
async fn persists_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;
    let mut flight = Flight::from_entity(setup.flight).unwrap();
    let now = Utc::now();
    flight.start(now).unwrap();

    let repo = FlightRepository::new(db);
    let updated = repo.update(&flight).await?;

    assert_eq!(updated.started, Some(now));
    assert_eq!(updated.version, 1);

    Ok(())
}

/// Tests two concurrent transitions on the same flight.
///
/// Both callers load version 0; only the first write may win.
///
/// Expected: Err(DbErr::RecordNotUpdated) for the second write
#[tokio::test]
async fn rejects_concurrent_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_flight_with_dependencies(db).await?;
    let mut first = Flight::from_entity(setup.flight.clone()).unwrap();
    let mut second = Flight::from_entity(setup.flight).unwrap();
    let now = Utc::now();
    first.start(now).unwrap();
    second.start(now).unwrap();

    let repo = FlightRepository::new(db);
    repo.update(&first).await?;
    let result = repo.update(&second).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
