//! Job factory for creating test job entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct JobFactory<'a> {
    db: &'a DatabaseConnection,
    origin_icao: String,
    operator_airline_icao: String,
    value: i32,
    expires_at: DateTime<Utc>,
}

impl<'a> JobFactory<'a> {
    /// Defaults to a cargo job worth 1000 SkyBucks expiring in one day.
    pub fn new(db: &'a DatabaseConnection, origin_icao: &str, airline_icao: &str) -> Self {
        Self {
            db,
            origin_icao: origin_icao.to_string(),
            operator_airline_icao: airline_icao.to_string(),
            value: 1000,
            expires_at: Utc::now() + Duration::days(1),
        }
    }

    pub fn value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::job::Model, DbErr> {
        entity::job::ActiveModel {
            id: ActiveValue::NotSet,
            operator_id: ActiveValue::Set(None),
            operator_airline_icao: ActiveValue::Set(Some(self.operator_airline_icao)),
            origin_icao: ActiveValue::Set(self.origin_icao),
            job_type: ActiveValue::Set("Cargo".to_string()),
            value: ActiveValue::Set(self.value),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_job(
    db: &DatabaseConnection,
    origin_icao: &str,
    airline_icao: &str,
) -> Result<entity::job::Model, DbErr> {
    JobFactory::new(db, origin_icao, airline_icao).build().await
}
