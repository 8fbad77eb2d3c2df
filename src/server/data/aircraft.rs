use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::aircraft::Aircraft;

pub struct AircraftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AircraftRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_registry(
        &self,
        registry: &str,
    ) -> Result<Option<entity::aircraft::Model>, DbErr> {
        entity::prelude::Aircraft::find_by_id(registry.to_string())
            .one(self.db)
            .await
    }

    /// Writes the aircraft's mutable state if the stored row is still at `aircraft.version`.
    ///
    /// Ownership and type are not written; they never change through the domain model.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated aircraft with its version incremented
    /// - `Err(DbErr::RecordNotUpdated)` - Row was changed or deleted since it was loaded
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, aircraft: &Aircraft) -> Result<entity::aircraft::Model, DbErr> {
        let result = entity::prelude::Aircraft::update_many()
            .set(entity::aircraft::ActiveModel {
                airport_icao: ActiveValue::Set(aircraft.airport_icao.clone()),
                name: ActiveValue::Set(aircraft.name.clone()),
                fuel: ActiveValue::Set(aircraft.fuel),
                warping_until: ActiveValue::Set(aircraft.warping_until),
                latitude: ActiveValue::Set(aircraft.latitude),
                longitude: ActiveValue::Set(aircraft.longitude),
                version: ActiveValue::Set(aircraft.version + 1),
                ..Default::default()
            })
            .filter(entity::aircraft::Column::Registry.eq(aircraft.registry.as_str()))
            .filter(entity::aircraft::Column::Version.eq(aircraft.version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        self.get_by_registry(&aircraft.registry)
            .await?
            .ok_or(DbErr::RecordNotUpdated)
    }
}
