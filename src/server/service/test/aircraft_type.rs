use entity::sea_orm_active_enums::{EngineType, FuelType};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{domain::DomainError, AppError},
    service::aircraft_type::AircraftTypeService,
};

/// Tests the view of a piston type without an uploader.
///
/// Expected: Ok with AvGas at 6.0 lbs/gal, "OpenSky" as uploader and no variants
#[tokio::test]
async fn resolves_fuel_and_default_uploader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let piston = factory::aircraft_type::AircraftTypeFactory::new(db)
        .engine_type(EngineType::Piston)
        .build()
        .await?;

    let dto = AircraftTypeService::new(db)
        .get_by_id(piston.id)
        .await?
        .unwrap();

    assert_eq!(dto.fuel_type, "AvGas");
    assert_eq!(dto.fuel_weight_per_gallon, 6.0);
    assert_eq!(dto.uploader_name, "OpenSky");
    assert!(!dto.has_variants);

    Ok(())
}

/// Tests that an explicit fuel type and the uploader's name are reported.
///
/// Expected: Ok with the override fuel type and the user's name
#[tokio::test]
async fn honours_override_and_uploader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::user::UserFactory::new(db)
        .user_name("modder")
        .build()
        .await?;
    let diesel = factory::aircraft_type::AircraftTypeFactory::new(db)
        .engine_type(EngineType::Piston)
        .override_fuel_type(FuelType::JetFuel)
        .uploader_id(Some(uploader.id))
        .build()
        .await?;

    let dto = AircraftTypeService::new(db)
        .get_by_id(diesel.id)
        .await?
        .unwrap();

    assert_eq!(dto.fuel_type, "JetFuel");
    assert_eq!(dto.fuel_weight_per_gallon, 6.7);
    assert_eq!(dto.uploader_name, "modder");

    Ok(())
}

/// Tests linking a variant and listing it on its parent.
///
/// Expected: Ok with the parent reporting the new variant
#[tokio::test]
async fn links_variant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::create_aircraft_type(db).await?;
    let child = factory::create_aircraft_type(db).await?;

    let service = AircraftTypeService::new(db);
    let updated = service.set_variant_of(child.id, Some(parent.id)).await?;
    assert_eq!(updated.is_variant_of, Some(parent.id));

    let parent = service.get_by_id(parent.id).await?.unwrap();
    assert!(parent.has_variants);
    assert_eq!(parent.variants, vec![child.id]);

    Ok(())
}

/// Tests that a variant link closing a loop is refused and nothing is written.
///
/// Expected: Err(CyclicTypeRelation)
#[tokio::test]
async fn rejects_variant_cycle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::create_aircraft_type(db).await?;
    let child = factory::aircraft_type::AircraftTypeFactory::new(db)
        .is_variant_of(Some(parent.id))
        .build()
        .await?;

    let service = AircraftTypeService::new(db);
    let result = service.set_variant_of(parent.id, Some(child.id)).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::CyclicTypeRelation { .. }))
    ));
    let parent = service.get_by_id(parent.id).await?.unwrap();
    assert_eq!(parent.is_variant_of, None);

    Ok(())
}

/// Tests two variant links issued at the same time that together would close a loop.
///
/// Expected: One Ok and one Err(CyclicTypeRelation), leaving no loop stored
#[tokio::test]
async fn concurrent_variant_links_cannot_close_loop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_aircraft_type(db).await?;
    let second = factory::create_aircraft_type(db).await?;

    let service = AircraftTypeService::new(db);
    let (linked_first, linked_second) = tokio::join!(
        service.set_variant_of(first.id, Some(second.id)),
        service.set_variant_of(second.id, Some(first.id)),
    );

    let results = [linked_first, linked_second];
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results.iter().any(|result| matches!(
        result,
        Err(AppError::DomainErr(DomainError::CyclicTypeRelation { .. }))
    )));

    let first = service.get_by_id(first.id).await?.unwrap();
    let second = service.get_by_id(second.id).await?.unwrap();
    assert!(first.is_variant_of != Some(second.id) || second.is_variant_of != Some(first.id));

    Ok(())
}

/// Tests two upgrade links issued at the same time that together would close a loop.
///
/// Expected: One Ok and one Err(CyclicTypeRelation), leaving no loop stored
#[tokio::test]
async fn concurrent_upgrade_links_cannot_close_loop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::create_aircraft_type(db).await?;
    let newer = factory::create_aircraft_type(db).await?;

    let service = AircraftTypeService::new(db);
    let (forward, backward) = tokio::join!(
        service.set_next_version(older.id, Some(newer.id)),
        service.set_next_version(newer.id, Some(older.id)),
    );

    assert!(forward.is_ok() != backward.is_ok());

    let older = service.get_by_id(older.id).await?.unwrap();
    let newer = service.get_by_id(newer.id).await?.unwrap();
    assert!(older.next_version != Some(newer.id) || newer.next_version != Some(older.id));

    Ok(())
}

/// Tests following and extending the upgrade path.
///
/// Expected: Ok with newer versions oldest first, Err when the chain would loop
#[tokio::test]
async fn follows_and_guards_upgrade_path() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let newest = factory::create_aircraft_type(db).await?;
    let middle = factory::aircraft_type::AircraftTypeFactory::new(db)
        .next_version(Some(newest.id))
        .build()
        .await?;
    let oldest = factory::create_aircraft_type(db).await?;

    let service = AircraftTypeService::new(db);
    service.set_next_version(oldest.id, Some(middle.id)).await?;

    let path = service.upgrade_path(oldest.id).await?.unwrap();
    let ids: Vec<i32> = path.iter().map(|step| step.id).collect();
    assert_eq!(ids, vec![middle.id, newest.id]);

    let result = service.set_next_version(newest.id, Some(oldest.id)).await;
    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::CyclicTypeRelation { .. }))
    ));

    assert!(service.upgrade_path(9999).await?.is_none());

    Ok(())
}

/// Tests linking to an unknown type.
///
/// Expected: Err(AircraftTypeNotFound)
#[tokio::test]
async fn rejects_unknown_link_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft_type = factory::create_aircraft_type(db).await?;

    let result = AircraftTypeService::new(db)
        .set_next_version(aircraft_type.id, Some(9999))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::AircraftTypeNotFound(9999)))
    ));

    Ok(())
}
