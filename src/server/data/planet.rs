use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every planet ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        planet_id: i32,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets the planets matching the provided IDs, IDs without a row are ignored
    pub async fn get_many_by_ids(
        &self,
        planet_ids: Vec<i32>,
    ) -> Result<Vec<entity::planet::Model>, DbErr> {
        if planet_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(planet_ids))
            .all(self.db)
            .await
    }
}
