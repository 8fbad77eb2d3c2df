use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::FlightPhase;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::flight::{CreateFlightParams, Flight};

pub struct FlightRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new flight plan in the planning state.
    ///
    /// # Arguments
    /// - `params` - Flight number, airports, aircraft and operator
    /// - `created` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(Model)` - The created flight
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        params: CreateFlightParams,
        created: DateTime<Utc>,
    ) -> Result<entity::flight::Model, DbErr> {
        let (operator_id, operator_airline_icao) = params.operator.to_columns();

        entity::flight::ActiveModel {
            flight_number: ActiveValue::Set(params.flight_number),
            origin_icao: ActiveValue::Set(params.origin_icao),
            destination_icao: ActiveValue::Set(params.destination_icao),
            alternate_icao: ActiveValue::Set(params.alternate_icao),
            aircraft_registry: ActiveValue::Set(params.aircraft_registry),
            operator_id: ActiveValue::Set(operator_id),
            operator_airline_icao: ActiveValue::Set(operator_airline_icao),
            flight_phase: ActiveValue::Set(FlightPhase::Briefing),
            created: ActiveValue::Set(created),
            started: ActiveValue::Set(None),
            paused: ActiveValue::Set(None),
            completed: ActiveValue::Set(None),
            latitude: ActiveValue::Set(None),
            longitude: ActiveValue::Set(None),
            altitude: ActiveValue::Set(None),
            ground_speed: ActiveValue::Set(None),
            heading: ActiveValue::Set(None),
            last_position_report: ActiveValue::Set(None),
            landed_at_icao: ActiveValue::Set(None),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find_by_id(id).one(self.db).await
    }

    /// Gets every flight assigned to an aircraft, oldest first.
    ///
    /// This is the explicit load for an aircraft's flights relation.
    pub async fn get_by_aircraft(
        &self,
        registry: &str,
    ) -> Result<Vec<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find()
            .filter(entity::flight::Column::AircraftRegistry.eq(registry))
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await
    }

    /// Writes the flight's lifecycle and position state if the stored row is still at
    /// `flight.version`.
    ///
    /// The operator columns are written from the tagged [`Operator`](crate::server::model::operator::Operator)
    /// so a successful write always leaves exactly one of them set.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated flight with its version incremented
    /// - `Err(DbErr::RecordNotUpdated)` - Row was changed or deleted since it was loaded
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, flight: &Flight) -> Result<entity::flight::Model, DbErr> {
        let (operator_id, operator_airline_icao) = flight.operator.to_columns();

        let result = entity::prelude::Flight::update_many()
            .set(entity::flight::ActiveModel {
                aircraft_registry: ActiveValue::Set(flight.aircraft_registry.clone()),
                operator_id: ActiveValue::Set(operator_id),
                operator_airline_icao: ActiveValue::Set(operator_airline_icao),
                flight_phase: ActiveValue::Set(flight.flight_phase),
                started: ActiveValue::Set(flight.started),
                paused: ActiveValue::Set(flight.paused),
                completed: ActiveValue::Set(flight.completed),
                latitude: ActiveValue::Set(flight.latitude),
                longitude: ActiveValue::Set(flight.longitude),
                altitude: ActiveValue::Set(flight.altitude),
                ground_speed: ActiveValue::Set(flight.ground_speed),
                heading: ActiveValue::Set(flight.heading),
                last_position_report: ActiveValue::Set(flight.last_position_report),
                landed_at_icao: ActiveValue::Set(flight.landed_at_icao.clone()),
                version: ActiveValue::Set(flight.version + 1),
                ..Default::default()
            })
            .filter(entity::flight::Column::Id.eq(flight.id))
            .filter(entity::flight::Column::Version.eq(flight.version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        self.get_by_id(flight.id)
            .await?
            .ok_or(DbErr::RecordNotUpdated)
    }
}
