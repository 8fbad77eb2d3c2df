//! Airline factory for creating test airline entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AirlineFactory<'a> {
    db: &'a DatabaseConnection,
    icao: String,
    name: String,
}

impl<'a> AirlineFactory<'a> {
    /// Defaults to a unique ICAO code and `"Airline {id}"` as name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            icao: format!("L{}", id),
            name: format!("Airline {}", id),
        }
    }

    pub fn icao(mut self, icao: impl Into<String>) -> Self {
        self.icao = icao.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::airline::Model, DbErr> {
        entity::airline::ActiveModel {
            icao: ActiveValue::Set(self.icao),
            iata: ActiveValue::Set(None),
            name: ActiveValue::Set(self.name),
            country: ActiveValue::Set("US".to_string()),
            founded: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_airline(db: &DatabaseConnection) -> Result<entity::airline::Model, DbErr> {
    AirlineFactory::new(db).build().await
}
