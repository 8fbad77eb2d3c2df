//! Aircraft type domain models, fuel resolution and the type relation graph.

use entity::sea_orm_active_enums::{EngineType, FuelType};
use std::collections::{HashMap, HashSet};

use crate::server::error::domain::DomainError;

/// Pounds per US gallon of aviation gasoline.
pub const AVGAS_WEIGHT_PER_GALLON: f64 = 6.0;

/// Pounds per US gallon of jet fuel.
pub const JET_FUEL_WEIGHT_PER_GALLON: f64 = 6.7;

/// Display name used when a type has no uploader.
pub const DEFAULT_UPLOADER_NAME: &str = "OpenSky";

#[derive(Debug, Clone, PartialEq)]
pub struct AircraftType {
    pub id: i32,
    pub name: String,
    pub manufacturer: String,
    pub engine_type: EngineType,
    /// Explicit fuel type, `NotUsed` to derive it from the engine.
    pub override_fuel_type: FuelType,
    /// Stored weight in lbs per gallon, negative to derive it from the fuel type.
    pub fuel_weight_per_gallon: f64,
    pub fuel_total_capacity: f64,
    pub max_payload_weight: f64,
    pub is_variant_of: Option<i32>,
    pub next_version: Option<i32>,
    pub uploader_id: Option<i32>,
    pub enabled: bool,
    pub version: i32,
}

impl AircraftType {
    pub fn from_entity(entity: entity::aircraft_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            manufacturer: entity.manufacturer,
            engine_type: entity.engine_type,
            override_fuel_type: entity.override_fuel_type,
            fuel_weight_per_gallon: entity.fuel_weight_per_gallon,
            fuel_total_capacity: entity.fuel_total_capacity,
            max_payload_weight: entity.max_payload_weight,
            is_variant_of: entity.is_variant_of,
            next_version: entity.next_version,
            uploader_id: entity.uploader_id,
            enabled: entity.enabled,
            version: entity.version,
        }
    }

    /// Fuel the type burns. The override wins unless it is `NotUsed`.
    pub fn fuel_type(&self) -> FuelType {
        if self.override_fuel_type != FuelType::NotUsed {
            return self.override_fuel_type;
        }

        match self.engine_type {
            EngineType::Piston => FuelType::AvGas,
            EngineType::Turboprop | EngineType::Jet | EngineType::HeloBellTurbine => {
                FuelType::JetFuel
            }
            EngineType::None | EngineType::Unsupported => FuelType::None,
        }
    }

    /// Fuel weight in lbs per US gallon.
    ///
    /// A stored value of zero or more is used as is, otherwise the weight follows from the
    /// resolved fuel type.
    pub fn fuel_weight_per_gallon(&self) -> f64 {
        if self.fuel_weight_per_gallon >= 0.0 {
            return self.fuel_weight_per_gallon;
        }

        match self.fuel_type() {
            FuelType::AvGas => AVGAS_WEIGHT_PER_GALLON,
            FuelType::JetFuel => JET_FUEL_WEIGHT_PER_GALLON,
            FuelType::None | FuelType::NotUsed => 0.0,
        }
    }
}

/// Links of one type inside a [`TypeGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeNode {
    pub id: i32,
    pub is_variant_of: Option<i32>,
    pub next_version: Option<i32>,
}

impl From<&AircraftType> for TypeNode {
    fn from(aircraft_type: &AircraftType) -> Self {
        Self {
            id: aircraft_type.id,
            is_variant_of: aircraft_type.is_variant_of,
            next_version: aircraft_type.next_version,
        }
    }
}

/// Arena of aircraft type links indexed by id.
///
/// Both `is_variant_of` and `next_version` form forests. Link changes are validated here
/// before they are written and again on the written state inside the same transaction so
/// neither relation can ever loop back on itself.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    nodes: HashMap<i32, TypeNode>,
}

impl TypeGraph {
    pub fn new(nodes: impl IntoIterator<Item = TypeNode>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|node| (node.id, node)).collect(),
        }
    }

    pub fn contains(&self, id: i32) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Newer versions of `id` following `next_version`, oldest first.
    ///
    /// Stops at the first id that is unknown or already visited.
    pub fn upgrade_path(&self, id: i32) -> Vec<i32> {
        let mut path = Vec::new();
        let mut visited = HashSet::from([id]);
        let mut current = self.nodes.get(&id).and_then(|node| node.next_version);

        while let Some(next) = current {
            if !visited.insert(next) || !self.contains(next) {
                break;
            }
            path.push(next);
            current = self.nodes.get(&next).and_then(|node| node.next_version);
        }

        path
    }

    /// Validates making `child` a variant of `parent`. Clearing the link is always allowed.
    ///
    /// # Returns
    /// - `Ok(())` - Link can be written
    /// - `Err(DomainError::AircraftTypeNotFound)` - Either id is unknown
    /// - `Err(DomainError::CyclicTypeRelation)` - `child` would become its own ancestor
    pub fn check_variant_of(&self, child: i32, parent: Option<i32>) -> Result<(), DomainError> {
        self.check_link(child, parent, |node| node.is_variant_of)
    }

    /// Validates pointing `from.next_version` at `to`. Clearing the link is always allowed.
    ///
    /// # Returns
    /// - `Ok(())` - Link can be written
    /// - `Err(DomainError::AircraftTypeNotFound)` - Either id is unknown
    /// - `Err(DomainError::CyclicTypeRelation)` - Upgrade chain would loop
    pub fn check_next_version(&self, from: i32, to: Option<i32>) -> Result<(), DomainError> {
        self.check_link(from, to, |node| node.next_version)
    }

    fn check_link(
        &self,
        source: i32,
        target: Option<i32>,
        link: impl Fn(&TypeNode) -> Option<i32>,
    ) -> Result<(), DomainError> {
        if !self.contains(source) {
            return Err(DomainError::AircraftTypeNotFound(source));
        }

        let Some(target) = target else {
            return Ok(());
        };

        if !self.contains(target) {
            return Err(DomainError::AircraftTypeNotFound(target));
        }

        let cycle = DomainError::CyclicTypeRelation {
            type_id: source,
            target_id: target,
        };

        // Walk up from the target; reaching the source means the new link closes a loop.
        let mut visited = HashSet::new();
        let mut current = Some(target);
        while let Some(id) = current {
            if id == source || !visited.insert(id) {
                return Err(cycle);
            }
            current = self.nodes.get(&id).and_then(&link);
        }

        Ok(())
    }
}
