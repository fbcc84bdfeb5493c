use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every character ordered by name, each with its home planet if one is set
    pub async fn get_all_with_homeplanet(
        &self,
    ) -> Result<
        Vec<(
            entity::character::Model,
            Option<entity::planet::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Character::find()
            .find_also_related(entity::planet::Entity)
            .order_by_asc(entity::character::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_id_with_homeplanet(
        &self,
        character_id: i32,
    ) -> Result<
        Option<(
            entity::character::Model,
            Option<entity::planet::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Character::find_by_id(character_id)
            .find_also_related(entity::planet::Entity)
            .one(self.db)
            .await
    }

    /// Gets the characters matching the provided IDs along with their home planets,
    /// IDs without a row are ignored
    pub async fn get_many_with_homeplanet_by_ids(
        &self,
        character_ids: Vec<i32>,
    ) -> Result<
        Vec<(
            entity::character::Model,
            Option<entity::planet::Model>,
        )>,
        DbErr,
    > {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Character::find()
            .filter(entity::character::Column::Id.is_in(character_ids))
            .find_also_related(entity::planet::Entity)
            .all(self.db)
            .await
    }
}
