use chrono::Duration;
use dioxus_logger::tracing;
use sea_orm::{ActiveEnum, ConnectionTrait, DatabaseConnection};

use crate::{
    model::aircraft::AircraftDto,
    server::{
        data::{
            aircraft::AircraftRepository, aircraft_type::AircraftTypeRepository,
            airline::AirlineRepository, flight::FlightRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            aircraft::Aircraft,
            aircraft_type::AircraftType,
            flight::Flight,
            operator::{Owner, SYSTEM_OWNER_NAME},
        },
        util::clock::Clock,
    },
};

pub struct AircraftService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> AircraftService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Gets an aircraft with its derived status, fuel model and owner name.
    ///
    /// # Returns
    /// - `Ok(Some(AircraftDto))` - The aircraft view at the clock's current time
    /// - `Ok(None)` - Aircraft not found
    /// - `Err(AppError::DomainErr)` - Stored data breaks an aircraft invariant, such as more
    ///   than one active flight
    /// - `Err(AppError)` - Database error
    pub async fn get_by_registry(&self, registry: &str) -> Result<Option<AircraftDto>, AppError> {
        let Some(aircraft) = load_with_flights(self.db, registry).await? else {
            return Ok(None);
        };

        Ok(Some(self.into_dto(aircraft).await?))
    }

    /// Fast-forwards an idle aircraft for `duration_seconds`.
    ///
    /// # Returns
    /// - `Ok(AircraftDto)` - The aircraft with its new warp deadline
    /// - `Err(AppError::BadRequest)` - Duration was not positive
    /// - `Err(AppError::NotFound)` - Aircraft not found
    /// - `Err(AppError::DomainErr(AircraftHasActiveFlight))` - Aircraft is flying
    /// - `Err(AppError::DbErr(RecordNotUpdated))` - Aircraft changed concurrently
    pub async fn start_warp(
        &self,
        registry: &str,
        duration_seconds: i64,
    ) -> Result<AircraftDto, AppError> {
        if duration_seconds <= 0 {
            return Err(AppError::BadRequest(
                "Warp duration must be positive".to_string(),
            ));
        }

        let mut aircraft = load_with_flights(self.db, registry)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Aircraft {} not found", registry)))?;

        aircraft.start_warp(self.clock.now(), Duration::seconds(duration_seconds))?;

        let updated = AircraftRepository::new(self.db).update(&aircraft).await?;
        aircraft.version = updated.version;

        tracing::info!(
            "Aircraft {} warping until {:?}",
            aircraft.registry,
            aircraft.warping_until
        );

        self.into_dto(aircraft).await
    }

    async fn into_dto(&self, aircraft: Aircraft) -> Result<AircraftDto, AppError> {
        let status = aircraft.status(self.clock.now())?;

        let aircraft_type = AircraftTypeRepository::new(self.db)
            .get_by_id(aircraft.type_id)
            .await?
            .map(AircraftType::from_entity)
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Aircraft {} references missing type {}",
                    aircraft.registry, aircraft.type_id
                ))
            })?;

        let owner_name = owner_name(self.db, &aircraft.owner).await?;

        Ok(AircraftDto {
            registry: aircraft.registry,
            name: aircraft.name,
            type_id: aircraft_type.id,
            type_name: aircraft_type.name.clone(),
            airport_icao: aircraft.airport_icao,
            owner_name,
            fuel: aircraft.fuel,
            fuel_type: aircraft_type.fuel_type().to_value(),
            fuel_weight_per_gallon: aircraft_type.fuel_weight_per_gallon(),
            status: status.to_string(),
            warping_until: aircraft.warping_until,
            latitude: aircraft.latitude,
            longitude: aircraft.longitude,
        })
    }
}

/// Loads an aircraft together with its flights relation.
///
/// # Returns
/// - `Ok(Some(Aircraft))` - Aircraft with `flights` loaded
/// - `Ok(None)` - Aircraft not found
/// - `Err(AppError::DomainErr)` - Stored aircraft or flight rows break an invariant
pub(super) async fn load_with_flights<C: ConnectionTrait>(
    db: &C,
    registry: &str,
) -> Result<Option<Aircraft>, AppError> {
    let Some(entity) = AircraftRepository::new(db).get_by_registry(registry).await? else {
        return Ok(None);
    };

    let flights = FlightRepository::new(db)
        .get_by_aircraft(registry)
        .await?
        .into_iter()
        .map(Flight::from_entity)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Aircraft::from_entity(entity)?.with_flights(flights)))
}

/// Resolves the display name of an aircraft owner.
async fn owner_name<C: ConnectionTrait>(db: &C, owner: &Owner) -> Result<String, AppError> {
    match owner {
        Owner::User(id) => UserRepository::new(db)
            .get_by_id(*id)
            .await?
            .map(|user| user.user_name)
            .ok_or_else(|| AppError::InternalError(format!("Owner user {} not found", id))),
        Owner::Airline(icao) => AirlineRepository::new(db)
            .get_by_icao(icao)
            .await?
            .map(|airline| airline.name)
            .ok_or_else(|| AppError::InternalError(format!("Owner airline {} not found", icao))),
        Owner::System => Ok(SYSTEM_OWNER_NAME.to_string()),
    }
}
