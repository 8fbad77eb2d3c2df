//! Aircraft type factory for creating test aircraft type entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::{EngineType, FuelType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test aircraft types.
///
/// Defaults to a jet without fuel override and a negative stored fuel weight so the weight is
/// derived from the fuel type.
pub struct AircraftTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    engine_type: EngineType,
    override_fuel_type: FuelType,
    fuel_weight_per_gallon: f64,
    is_variant_of: Option<i32>,
    next_version: Option<i32>,
    uploader_id: Option<i32>,
}

impl<'a> AircraftTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Type {}", id),
            engine_type: EngineType::Jet,
            override_fuel_type: FuelType::NotUsed,
            fuel_weight_per_gallon: -1.0,
            is_variant_of: None,
            next_version: None,
            uploader_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn engine_type(mut self, engine_type: EngineType) -> Self {
        self.engine_type = engine_type;
        self
    }

    pub fn override_fuel_type(mut self, override_fuel_type: FuelType) -> Self {
        self.override_fuel_type = override_fuel_type;
        self
    }

    pub fn fuel_weight_per_gallon(mut self, fuel_weight_per_gallon: f64) -> Self {
        self.fuel_weight_per_gallon = fuel_weight_per_gallon;
        self
    }

    pub fn is_variant_of(mut self, is_variant_of: Option<i32>) -> Self {
        self.is_variant_of = is_variant_of;
        self
    }

    pub fn next_version(mut self, next_version: Option<i32>) -> Self {
        self.next_version = next_version;
        self
    }

    pub fn uploader_id(mut self, uploader_id: Option<i32>) -> Self {
        self.uploader_id = uploader_id;
        self
    }

    pub async fn build(self) -> Result<entity::aircraft_type::Model, DbErr> {
        entity::aircraft_type::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            manufacturer: ActiveValue::Set("Test Aviation".to_string()),
            engine_type: ActiveValue::Set(self.engine_type),
            override_fuel_type: ActiveValue::Set(self.override_fuel_type),
            fuel_weight_per_gallon: ActiveValue::Set(self.fuel_weight_per_gallon),
            fuel_total_capacity: ActiveValue::Set(5000.0),
            max_payload_weight: ActiveValue::Set(20000.0),
            is_variant_of: ActiveValue::Set(self.is_variant_of),
            next_version: ActiveValue::Set(self.next_version),
            uploader_id: ActiveValue::Set(self.uploader_id),
            enabled: ActiveValue::Set(true),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_aircraft_type(
    db: &DatabaseConnection,
) -> Result<entity::aircraft_type::Model, DbErr> {
    AircraftTypeFactory::new(db).build().await
}
