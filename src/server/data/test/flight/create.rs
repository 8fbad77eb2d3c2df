use super::*;

/// Tests creating a flight plan operated by a user.
///
/// Expected: Ok with the flight in planning and only the user operator column set
#[tokio::test]
async fn creates_planned_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let origin = factory::create_airport(db).await?;
    let destination = factory::create_airport(db).await?;

    let repo = FlightRepository::new(db);
    let flight = repo
        .create(
            CreateFlightParams {
                flight_number: 42,
                origin_icao: origin.icao.clone(),
                destination_icao: destination.icao.clone(),
                alternate_icao: destination.icao.clone(),
                aircraft_registry: None,
                operator: Operator::User(user.id),
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(flight.flight_number, 42);
    assert_eq!(flight.operator_id, Some(user.id));
    assert_eq!(flight.operator_airline_icao, None);
    assert!(flight.started.is_none());
    assert_eq!(flight.version, 0);

    Ok(())
}
