use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AircraftTypeDto {
    pub id: i32,
    pub name: String,
    pub manufacturer: String,
    pub engine_type: String,
    pub fuel_type: String,
    /// Pounds per US gallon
    pub fuel_weight_per_gallon: f64,
    pub fuel_total_capacity: f64,
    pub max_payload_weight: f64,
    pub is_variant_of: Option<i32>,
    pub next_version: Option<i32>,
    pub has_variants: bool,
    pub variants: Vec<i32>,
    pub uploader_name: String,
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AircraftTypeSummaryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SetVariantOfDto {
    pub is_variant_of: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SetNextVersionDto {
    pub next_version: Option<i32>,
}
