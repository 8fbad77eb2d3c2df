use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct AircraftTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AircraftTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::aircraft_type::Model>, DbErr> {
        entity::prelude::AircraftType::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets every aircraft type ordered by ID, used to build the type relation graph.
    pub async fn get_all(&self) -> Result<Vec<entity::aircraft_type::Model>, DbErr> {
        entity::prelude::AircraftType::find()
            .order_by_asc(entity::aircraft_type::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the direct variants of a type ordered by ID.
    pub async fn get_variants(&self, id: i32) -> Result<Vec<entity::aircraft_type::Model>, DbErr> {
        entity::prelude::AircraftType::find()
            .filter(entity::aircraft_type::Column::IsVariantOf.eq(id))
            .order_by_asc(entity::aircraft_type::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets both type links if the stored row is still at `expected_version`.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated type with its version incremented
    /// - `Err(DbErr::RecordNotUpdated)` - Row was changed or deleted since it was loaded
    pub async fn update_links(
        &self,
        id: i32,
        expected_version: i32,
        is_variant_of: Option<i32>,
        next_version: Option<i32>,
    ) -> Result<entity::aircraft_type::Model, DbErr> {
        let result = entity::prelude::AircraftType::update_many()
            .set(entity::aircraft_type::ActiveModel {
                is_variant_of: ActiveValue::Set(is_variant_of),
                next_version: ActiveValue::Set(next_version),
                version: ActiveValue::Set(expected_version + 1),
                ..Default::default()
            })
            .filter(entity::aircraft_type::Column::Id.eq(id))
            .filter(entity::aircraft_type::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotUpdated)
    }
}
