use super::*;

/// Tests fetching an existing aircraft by registry.
///
/// Expected: Ok(Some) with the stored aircraft
#[tokio::test]
async fn returns_existing_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft_type = factory::create_aircraft_type(db).await?;
    let created = factory::aircraft::AircraftFactory::new(db, aircraft_type.id)
        .registry("N123OS")
        .build()
        .await?;

    let repo = AircraftRepository::new(db);
    let found = repo.get_by_registry("N123OS").await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests fetching an unknown registry.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_registry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AircraftRepository::new(db);

    assert!(repo.get_by_registry("N000XX").await?.is_none());

    Ok(())
}
