use dioxus_logger::tracing;
use entity::sea_orm_active_enums::FlightPhase;
use sea_orm::{ActiveEnum, ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::collections::HashSet;

use crate::{
    model::{
        flight::{
            CompleteFlightDto, CreateFlightDto, FlightDto, PositionReportDto,
            StartFlightResultDto, StartFlightStatus,
        },
        job::PayloadDto,
    },
    server::{
        data::{
            aircraft::AircraftRepository, aircraft_type::AircraftTypeRepository,
            airport::AirportRepository, flight::FlightRepository, payload::PayloadRepository,
        },
        error::{domain::DomainError, AppError},
        model::{
            aircraft::Aircraft,
            aircraft_type::AircraftType,
            flight::{CreateFlightParams, Flight, PositionReport},
            flight_start::StartChecks,
            operator::Operator,
            payload::{Payload, PayloadLocation},
        },
        service::aircraft::load_with_flights,
        util::clock::Clock,
    },
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Creates a flight plan.
    ///
    /// # Returns
    /// - `Ok(FlightDto)` - The planned flight
    /// - `Err(AppError::BadRequest)` - Not exactly one operator given
    /// - `Err(AppError)` - Database error, including unknown airports or aircraft
    pub async fn create(&self, dto: CreateFlightDto) -> Result<FlightDto, AppError> {
        let operator = Operator::from_columns(dto.operator_id, dto.operator_airline_icao)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let entity = FlightRepository::new(self.db)
            .create(
                CreateFlightParams {
                    flight_number: dto.flight_number,
                    origin_icao: dto.origin_icao,
                    destination_icao: dto.destination_icao,
                    alternate_icao: dto.alternate_icao,
                    aircraft_registry: dto.aircraft_registry,
                    operator,
                },
                self.clock.now(),
            )
            .await?;

        Ok(Flight::from_entity(entity)?.into_dto())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<FlightDto>, AppError> {
        let flight = FlightRepository::new(self.db).get_by_id(id).await?;

        match flight {
            Some(entity) => Ok(Some(Flight::from_entity(entity)?.into_dto())),
            None => Ok(None),
        }
    }

    /// Starts a planned flight.
    ///
    /// Runs the start preconditions in order; a failing check that is not in `overrides` is
    /// returned as the result status and nothing is written. On success the flight becomes
    /// active, planned payloads waiting at the origin are loaded aboard if the aircraft is
    /// parked there, and the aircraft leaves its airport, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(StartFlightResultDto)` - `Started`, or the first blocking precondition
    /// - `Err(AppError::NotFound)` - Flight, aircraft or origin airport not found
    /// - `Err(AppError::DomainErr)` - Flight not in planning, no aircraft assigned, aircraft
    ///   busy with another flight or warping
    /// - `Err(AppError::DbErr(RecordNotUpdated))` - A row changed concurrently
    pub async fn start(
        &self,
        id: i32,
        overrides: &[StartFlightStatus],
    ) -> Result<StartFlightResultDto, AppError> {
        let now = self.clock.now();
        let txn = self.db.begin().await?;

        let flight = load_flight(&txn, id).await?;

        // Validate the transition on a copy so a blocked start leaves the flight untouched.
        let mut started = flight.clone();
        started.start(now)?;

        let registry = flight
            .aircraft_registry
            .clone()
            .ok_or(DomainError::NoAircraftAssigned(flight.id))?;

        let mut aircraft = load_with_flights(&txn, &registry)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Aircraft {} not found", registry)))?;

        if let Some(active) = aircraft.active_flight()? {
            return Err(DomainError::AircraftHasActiveFlight {
                registry,
                flight_id: active.id,
            }
            .into());
        }

        if aircraft.is_warping(now) {
            return Err(DomainError::AircraftWarping(registry).into());
        }

        let aircraft_type = AircraftTypeRepository::new(&txn)
            .get_by_id(aircraft.type_id)
            .await?
            .map(AircraftType::from_entity)
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Aircraft {} references missing type {}",
                    registry, aircraft.type_id
                ))
            })?;

        let origin = AirportRepository::new(&txn)
            .get_by_icao(&flight.origin_icao)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Origin airport {} not found", flight.origin_icao))
            })?;

        // Payloads are only loaded when the aircraft is actually parked where they wait.
        let at_origin = aircraft.airport_icao.as_deref() == Some(flight.origin_icao.as_str());

        let payload_repo = PayloadRepository::new(&txn);
        let planned = to_payloads(payload_repo.get_planned(flight.id).await?)?;
        let planned_ids: HashSet<i32> = planned.iter().map(|p| p.id).collect();
        let unplanned: Vec<i32> = payload_repo
            .get_aboard(&registry)
            .await?
            .into_iter()
            .map(|p| p.id)
            .filter(|id| !planned_ids.contains(id))
            .collect();

        let checks = StartChecks {
            origin_icao: &flight.origin_icao,
            aircraft_airport_icao: aircraft.airport_icao.as_deref(),
            origin_has_av_gas: origin.has_av_gas,
            origin_has_jet_fuel: origin.has_jet_fuel,
            fuel_type: aircraft_type.fuel_type(),
            non_flight_plan_payloads: &unplanned,
        };

        if let Err(blocked) = checks.evaluate(overrides) {
            tracing::warn!(
                "Start of flight {} blocked: {}",
                flight.id,
                blocked.status
            );

            return Ok(StartFlightResultDto {
                status: blocked.status,
                message: blocked.message,
                flight: flight.into_dto(),
            });
        }

        let updated = FlightRepository::new(&txn).update(&started).await?;

        if at_origin {
            for mut payload in planned {
                if payload.is_at_airport(&flight.origin_icao) {
                    payload.location = PayloadLocation::Aircraft(registry.clone());
                    payload_repo.update_location(&payload).await?;
                }
            }
        }

        aircraft.airport_icao = None;
        AircraftRepository::new(&txn).update(&aircraft).await?;

        txn.commit().await?;

        tracing::info!(
            "Flight {} started with aircraft {}",
            started.full_flight_number(),
            registry
        );

        Ok(StartFlightResultDto {
            status: StartFlightStatus::Started,
            message: format!("Flight {} started", started.full_flight_number()),
            flight: Flight::from_entity(updated)?.into_dto(),
        })
    }

    /// Pauses an active flight.
    pub async fn pause(&self, id: i32) -> Result<FlightDto, AppError> {
        let now = self.clock.now();
        self.transition(id, |flight| flight.pause(now)).await
    }

    /// Resumes a paused flight.
    pub async fn resume(&self, id: i32) -> Result<FlightDto, AppError> {
        self.transition(id, Flight::resume).await
    }

    /// Completes an active or paused flight.
    ///
    /// Sets the aircraft down at the landing airport (the destination unless another one is
    /// given) and unloads aboard payloads destined for that airport, in one transaction.
    ///
    /// # Returns
    /// - `Ok(FlightDto)` - The completed flight
    /// - `Err(AppError::NotFound)` - Flight or landing airport not found
    /// - `Err(AppError::DomainErr)` - Flight not started or already completed
    /// - `Err(AppError::DbErr(RecordNotUpdated))` - A row changed concurrently
    pub async fn complete(&self, id: i32, dto: CompleteFlightDto) -> Result<FlightDto, AppError> {
        let now = self.clock.now();
        let txn = self.db.begin().await?;

        let mut flight = load_flight(&txn, id).await?;
        let landed_at_icao = dto
            .landed_at_icao
            .unwrap_or_else(|| flight.destination_icao.clone());

        let airport = AirportRepository::new(&txn)
            .get_by_icao(&landed_at_icao)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Airport {} not found", landed_at_icao)))?;

        flight.complete(now, landed_at_icao.clone())?;
        let updated = FlightRepository::new(&txn).update(&flight).await?;

        if let Some(registry) = &flight.aircraft_registry {
            let aircraft_repo = AircraftRepository::new(&txn);
            let entity = aircraft_repo
                .get_by_registry(registry)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Aircraft {} not found", registry)))?;

            let mut aircraft = Aircraft::from_entity(entity)?;
            aircraft.airport_icao = Some(airport.icao.clone());
            aircraft.latitude = airport.latitude;
            aircraft.longitude = airport.longitude;
            aircraft_repo.update(&aircraft).await?;

            let payload_repo = PayloadRepository::new(&txn);
            for mut payload in to_payloads(payload_repo.get_aboard(registry).await?)? {
                if payload.destination_icao == airport.icao {
                    payload.location = PayloadLocation::Airport(airport.icao.clone());
                    payload_repo.update_location(&payload).await?;
                }
            }
        }

        txn.commit().await?;

        tracing::info!(
            "Flight {} completed at {}",
            flight.full_flight_number(),
            landed_at_icao
        );

        Ok(Flight::from_entity(updated)?.into_dto())
    }

    /// Records a position report from the flying client.
    ///
    /// # Returns
    /// - `Ok(FlightDto)` - The flight with its new phase
    /// - `Err(AppError::BadRequest)` - Unknown flight phase
    /// - `Err(AppError::DomainErr)` - Flight not started or already completed
    pub async fn report_position(
        &self,
        id: i32,
        dto: PositionReportDto,
    ) -> Result<FlightDto, AppError> {
        let flight_phase = FlightPhase::try_from_value(&dto.flight_phase).map_err(|_| {
            AppError::BadRequest(format!("Unknown flight phase {}", dto.flight_phase))
        })?;

        let report = PositionReport {
            flight_phase,
            latitude: dto.latitude,
            longitude: dto.longitude,
            altitude: dto.altitude,
            ground_speed: dto.ground_speed,
            heading: dto.heading,
        };
        let now = self.clock.now();

        self.transition(id, |flight| flight.report_position(report, now))
            .await
    }

    /// Adds a payload to the plan of a flight that has not started yet.
    ///
    /// # Returns
    /// - `Ok(Vec<PayloadDto>)` - The flight's planned payloads after the change
    /// - `Err(AppError::NotFound)` - Flight or payload not found
    /// - `Err(AppError::DomainErr)` - Flight already started or completed, payload neither
    ///   at the origin nor aboard the flight's aircraft, or planned on another open flight
    pub async fn add_payload(
        &self,
        flight_id: i32,
        payload_id: i32,
    ) -> Result<Vec<PayloadDto>, AppError> {
        let flight = load_flight(self.db, flight_id).await?;
        flight.ensure_planning()?;

        let payload_repo = PayloadRepository::new(self.db);
        let payload = payload_repo
            .get_by_id(payload_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Payload {} not found", payload_id)))?;
        let payload = Payload::from_entity(payload)?;

        let aboard = flight
            .aircraft_registry
            .as_deref()
            .is_some_and(|registry| payload.is_aboard(registry));
        if !aboard && !payload.is_at_airport(&flight.origin_icao) {
            return Err(DomainError::PayloadNotAvailable {
                payload_id,
                flight_id,
            }
            .into());
        }

        let other_plan = payload_repo
            .get_open_plan_flight_ids(payload_id)
            .await?
            .into_iter()
            .find(|id| *id != flight_id);
        if let Some(other) = other_plan {
            return Err(DomainError::PayloadAlreadyPlanned {
                payload_id,
                flight_id: other,
            }
            .into());
        }

        payload_repo.add_to_plan(flight_id, payload_id).await?;

        self.get_planned_payloads(flight_id).await
    }

    pub async fn get_planned_payloads(&self, flight_id: i32) -> Result<Vec<PayloadDto>, AppError> {
        let planned = PayloadRepository::new(self.db).get_planned(flight_id).await?;

        Ok(to_payloads(planned)?
            .into_iter()
            .map(Payload::into_dto)
            .collect())
    }

    /// Loads a flight, applies a single-entity transition and writes it back.
    async fn transition<F>(&self, id: i32, apply: F) -> Result<FlightDto, AppError>
    where
        F: FnOnce(&mut Flight) -> Result<(), DomainError>,
    {
        let mut flight = load_flight(self.db, id).await?;
        apply(&mut flight)?;

        let updated = FlightRepository::new(self.db).update(&flight).await?;

        Ok(Flight::from_entity(updated)?.into_dto())
    }
}

async fn load_flight<C: ConnectionTrait>(db: &C, id: i32) -> Result<Flight, AppError> {
    let entity = FlightRepository::new(db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Flight {} not found", id)))?;

    Ok(Flight::from_entity(entity)?)
}

fn to_payloads(entities: Vec<entity::payload::Model>) -> Result<Vec<Payload>, DomainError> {
    entities.into_iter().map(Payload::from_entity).collect()
}
