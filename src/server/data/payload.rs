use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{job::CreatePayloadParams, payload::Payload};

pub struct PayloadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PayloadRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a payload waiting at an airport.
    pub async fn create_at_airport(
        &self,
        airport_icao: &str,
        job_id: Option<i32>,
        params: CreatePayloadParams,
    ) -> Result<entity::payload::Model, DbErr> {
        entity::payload::ActiveModel {
            airport_icao: ActiveValue::Set(Some(airport_icao.to_string())),
            aircraft_registry: ActiveValue::Set(None),
            destination_icao: ActiveValue::Set(params.destination_icao),
            description: ActiveValue::Set(params.description),
            weight: ActiveValue::Set(params.weight),
            job_id: ActiveValue::Set(job_id),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::payload::Model>, DbErr> {
        entity::prelude::Payload::find_by_id(id).one(self.db).await
    }

    /// Gets payloads currently loaded on an aircraft.
    pub async fn get_aboard(&self, registry: &str) -> Result<Vec<entity::payload::Model>, DbErr> {
        entity::prelude::Payload::find()
            .filter(entity::payload::Column::AircraftRegistry.eq(registry))
            .order_by_asc(entity::payload::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets payloads in a flight's plan.
    pub async fn get_planned(&self, flight_id: i32) -> Result<Vec<entity::payload::Model>, DbErr> {
        entity::prelude::Payload::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::flight_payload::Relation::Payload.def().rev(),
            )
            .filter(entity::flight_payload::Column::FlightId.eq(flight_id))
            .order_by_asc(entity::payload::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the IDs of uncompleted flights whose plan contains the payload.
    pub async fn get_open_plan_flight_ids(&self, payload_id: i32) -> Result<Vec<i32>, DbErr> {
        let plans = entity::prelude::FlightPayload::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::flight_payload::Relation::Flight.def(),
            )
            .filter(entity::flight_payload::Column::PayloadId.eq(payload_id))
            .filter(entity::flight::Column::Completed.is_null())
            .order_by_asc(entity::flight_payload::Column::FlightId)
            .all(self.db)
            .await?;

        Ok(plans.into_iter().map(|plan| plan.flight_id).collect())
    }

    /// Gets payloads belonging to any of the given jobs.
    pub async fn get_by_jobs(&self, job_ids: &[i32]) -> Result<Vec<entity::payload::Model>, DbErr> {
        entity::prelude::Payload::find()
            .filter(entity::payload::Column::JobId.is_in(job_ids.iter().copied()))
            .order_by_asc(entity::payload::Column::Id)
            .all(self.db)
            .await
    }

    /// Adds a payload to a flight's plan. Adding it twice is a no-op.
    pub async fn add_to_plan(&self, flight_id: i32, payload_id: i32) -> Result<(), DbErr> {
        let exists = entity::prelude::FlightPayload::find_by_id((flight_id, payload_id))
            .one(self.db)
            .await?
            .is_some();

        if !exists {
            entity::flight_payload::ActiveModel {
                flight_id: ActiveValue::Set(flight_id),
                payload_id: ActiveValue::Set(payload_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Moves a payload to its new location if the stored row is still at `payload.version`.
    ///
    /// # Returns
    /// - `Ok(())` - Location written and version incremented
    /// - `Err(DbErr::RecordNotUpdated)` - Row was changed or deleted since it was loaded
    pub async fn update_location(&self, payload: &Payload) -> Result<(), DbErr> {
        let (airport_icao, aircraft_registry) = payload.location_columns();

        let result = entity::prelude::Payload::update_many()
            .set(entity::payload::ActiveModel {
                airport_icao: ActiveValue::Set(airport_icao),
                aircraft_registry: ActiveValue::Set(aircraft_registry),
                version: ActiveValue::Set(payload.version + 1),
                ..Default::default()
            })
            .filter(entity::payload::Column::Id.eq(payload.id))
            .filter(entity::payload::Column::Version.eq(payload.version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }

    /// Unlinks payloads that are aboard an aircraft from the given jobs so they survive the
    /// jobs being deleted.
    pub async fn detach_aboard_from_jobs(&self, job_ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::Payload::update_many()
            .col_expr(
                entity::payload::Column::JobId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .filter(entity::payload::Column::JobId.is_in(job_ids.iter().copied()))
            .filter(entity::payload::Column::AircraftRegistry.is_not_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes payloads of the given jobs that are still waiting at an airport.
    pub async fn delete_grounded_for_jobs(&self, job_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Payload::delete_many()
            .filter(entity::payload::Column::JobId.is_in(job_ids.iter().copied()))
            .filter(entity::payload::Column::AirportIcao.is_not_null())
            .exec(self.db)
            .await
    }
}
