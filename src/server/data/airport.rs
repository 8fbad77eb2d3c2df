use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct AirportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_icao(&self, icao: &str) -> Result<Option<entity::airport::Model>, DbErr> {
        entity::prelude::Airport::find_by_id(icao.to_string())
            .one(self.db)
            .await
    }
}
