use sea_orm::{ActiveEnum, ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::aircraft_type::{AircraftTypeDto, AircraftTypeSummaryDto},
    server::{
        data::{aircraft_type::AircraftTypeRepository, user::UserRepository},
        error::{domain::DomainError, AppError},
        model::aircraft_type::{AircraftType, TypeGraph, TypeNode, DEFAULT_UPLOADER_NAME},
    },
};

pub struct AircraftTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an aircraft type with resolved fuel model, variants and uploader name.
    ///
    /// # Returns
    /// - `Ok(Some(AircraftTypeDto))` - The type view
    /// - `Ok(None)` - Type not found
    /// - `Err(AppError)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<AircraftTypeDto>, AppError> {
        let repo = AircraftTypeRepository::new(self.db);

        let Some(aircraft_type) = repo.get_by_id(id).await?.map(AircraftType::from_entity) else {
            return Ok(None);
        };

        let uploader_name = match aircraft_type.uploader_id {
            Some(uploader_id) => UserRepository::new(self.db)
                .get_by_id(uploader_id)
                .await?
                .map(|user| user.user_name)
                .unwrap_or_else(|| DEFAULT_UPLOADER_NAME.to_string()),
            None => DEFAULT_UPLOADER_NAME.to_string(),
        };

        let variants: Vec<i32> = repo
            .get_variants(id)
            .await?
            .into_iter()
            .map(|variant| variant.id)
            .collect();

        Ok(Some(AircraftTypeDto {
            id: aircraft_type.id,
            engine_type: aircraft_type.engine_type.to_value(),
            fuel_type: aircraft_type.fuel_type().to_value(),
            fuel_weight_per_gallon: aircraft_type.fuel_weight_per_gallon(),
            fuel_total_capacity: aircraft_type.fuel_total_capacity,
            max_payload_weight: aircraft_type.max_payload_weight,
            is_variant_of: aircraft_type.is_variant_of,
            next_version: aircraft_type.next_version,
            has_variants: !variants.is_empty(),
            variants,
            uploader_name,
            enabled: aircraft_type.enabled,
            name: aircraft_type.name,
            manufacturer: aircraft_type.manufacturer,
        }))
    }

    /// Gets the chain of newer versions of a type, oldest first.
    ///
    /// # Returns
    /// - `Ok(Some(path))` - Summaries following `next_version`, empty for the newest type
    /// - `Ok(None)` - Type not found
    pub async fn upgrade_path(
        &self,
        id: i32,
    ) -> Result<Option<Vec<AircraftTypeSummaryDto>>, AppError> {
        let (types, graph) = load_graph(self.db).await?;

        if !graph.contains(id) {
            return Ok(None);
        }

        let path = graph
            .upgrade_path(id)
            .into_iter()
            .filter_map(|step| types.iter().find(|t| t.id == step))
            .map(|t| AircraftTypeSummaryDto {
                id: t.id,
                name: t.name.clone(),
            })
            .collect();

        Ok(Some(path))
    }

    /// Makes `id` a variant of `is_variant_of`, or clears the link with `None`.
    ///
    /// # Returns
    /// - `Ok(AircraftTypeDto)` - The updated type
    /// - `Err(AppError::DomainErr(CyclicTypeRelation))` - Link would create a cycle
    /// - `Err(AppError::DomainErr(AircraftTypeNotFound))` - Either type is unknown
    /// - `Err(AppError::DbErr(RecordNotUpdated))` - Type changed concurrently
    pub async fn set_variant_of(
        &self,
        id: i32,
        is_variant_of: Option<i32>,
    ) -> Result<AircraftTypeDto, AppError> {
        let txn = self.db.begin().await?;

        let (types, graph) = load_graph(&txn).await?;
        graph.check_variant_of(id, is_variant_of)?;
        let current = Self::find(&types, id)?;

        AircraftTypeRepository::new(&txn)
            .update_links(id, current.version, is_variant_of, current.next_version)
            .await?;

        // A concurrent link elsewhere in the chain may have landed since the graph was read.
        let (_, written) = load_graph(&txn).await?;
        written.check_variant_of(id, is_variant_of)?;

        txn.commit().await?;

        self.reload(id).await
    }

    /// Points `id.next_version` at another type, or clears the link with `None`.
    ///
    /// # Returns
    /// - `Ok(AircraftTypeDto)` - The updated type
    /// - `Err(AppError::DomainErr(CyclicTypeRelation))` - Upgrade chain would loop
    /// - `Err(AppError::DomainErr(AircraftTypeNotFound))` - Either type is unknown
    /// - `Err(AppError::DbErr(RecordNotUpdated))` - Type changed concurrently
    pub async fn set_next_version(
        &self,
        id: i32,
        next_version: Option<i32>,
    ) -> Result<AircraftTypeDto, AppError> {
        let txn = self.db.begin().await?;

        let (types, graph) = load_graph(&txn).await?;
        graph.check_next_version(id, next_version)?;
        let current = Self::find(&types, id)?;

        AircraftTypeRepository::new(&txn)
            .update_links(id, current.version, current.is_variant_of, next_version)
            .await?;

        let (_, written) = load_graph(&txn).await?;
        written.check_next_version(id, next_version)?;

        txn.commit().await?;

        self.reload(id).await
    }

    fn find(types: &[AircraftType], id: i32) -> Result<&AircraftType, DomainError> {
        types
            .iter()
            .find(|t| t.id == id)
            .ok_or(DomainError::AircraftTypeNotFound(id))
    }

    async fn reload(&self, id: i32) -> Result<AircraftTypeDto, AppError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Aircraft type {} not found", id)))
    }
}

async fn load_graph<C: ConnectionTrait>(
    db: &C,
) -> Result<(Vec<AircraftType>, TypeGraph), AppError> {
    let types: Vec<AircraftType> = AircraftTypeRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(AircraftType::from_entity)
        .collect();

    let graph = TypeGraph::new(types.iter().map(TypeNode::from));

    Ok((types, graph))
}
