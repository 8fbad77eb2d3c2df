use super::*;

/// Tests writing aircraft state with the current version.
///
/// Verifies the new state is stored and the version is incremented.
///
/// Expected: Ok with version 1
#[tokio::test]
async fn updates_and_increments_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft_type = factory::create_aircraft_type(db).await?;
    let created = factory::create_aircraft(db, aircraft_type.id).await?;

    let mut aircraft = Aircraft::from_entity(created).unwrap();
    let warp_end = Utc::now() + Duration::minutes(30);
    aircraft.warping_until = Some(warp_end);
    aircraft.fuel = 42.0;

    let repo = AircraftRepository::new(db);
    let updated = repo.update(&aircraft).await?;

    assert_eq!(updated.version, 1);
    assert_eq!(updated.fuel, 42.0);
    assert_eq!(updated.warping_until, Some(warp_end));

    Ok(())
}

/// Tests writing aircraft state with a stale version.
///
/// Simulates two writers loading the same row; the second write must be rejected rather
/// than silently overwriting the first.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft_type = factory::create_aircraft_type(db).await?;
    let created = factory::create_aircraft(db, aircraft_type.id).await?;

    let mut first = Aircraft::from_entity(created.clone()).unwrap();
    let mut second = Aircraft::from_entity(created).unwrap();

    let repo = AircraftRepository::new(db);
    first.fuel = 10.0;
    repo.update(&first).await?;

    second.fuel = 20.0;
    let result = repo.update(&second).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    let stored = repo.get_by_registry(&first.registry).await?.unwrap();
    assert_eq!(stored.fuel, 10.0);

    Ok(())
}
