use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::job::CreateJobParams;

pub struct JobRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the job row. Payloads are created separately by the caller.
    pub async fn create(
        &self,
        params: &CreateJobParams,
        created_at: DateTime<Utc>,
    ) -> Result<entity::job::Model, DbErr> {
        let (operator_id, operator_airline_icao) = params.operator.to_columns();

        entity::job::ActiveModel {
            operator_id: ActiveValue::Set(operator_id),
            operator_airline_icao: ActiveValue::Set(operator_airline_icao),
            origin_icao: ActiveValue::Set(params.origin_icao.clone()),
            job_type: ActiveValue::Set(params.job_type.clone()),
            value: ActiveValue::Set(params.value),
            expires_at: ActiveValue::Set(params.expires_at),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets jobs offered at an airport that have not expired at `now`, soonest expiry first.
    pub async fn get_unexpired_at_airport(
        &self,
        icao: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::job::Model>, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::OriginIcao.eq(icao))
            .filter(entity::job::Column::ExpiresAt.gt(now))
            .order_by_asc(entity::job::Column::ExpiresAt)
            .all(self.db)
            .await
    }

    /// Gets IDs of jobs that expired at or before `now`.
    pub async fn get_expired_ids(&self, now: DateTime<Utc>) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Job::find()
            .select_only()
            .column(entity::job::Column::Id)
            .filter(entity::job::Column::ExpiresAt.lte(now))
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Job::delete_many()
            .filter(entity::job::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
