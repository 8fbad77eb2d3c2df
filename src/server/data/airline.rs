use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct AirlineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirlineRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_icao(&self, icao: &str) -> Result<Option<entity::airline::Model>, DbErr> {
        entity::prelude::Airline::find_by_id(icao.to_string())
            .one(self.db)
            .await
    }
}
