use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new favorite character edge
    ///
    /// Does not check whether the user or character exist, nor whether the edge is already
    /// present; callers are responsible for both.
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `character_id` (`i32`): ID of the character entry in the database
    /// - `user_characteristics` (`String`): Display string describing the edge
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
        user_characteristics: String,
    ) -> Result<entity::favorite_character::Model, DbErr> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            characters_id: ActiveValue::Set(character_id),
            user_characteristics: ActiveValue::Set(Some(user_characteristics)),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Get the favorite edge between a user and a character, if any
    pub async fn get_by_user_and_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<entity::favorite_character::Model>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharactersId.eq(character_id))
            .one(self.db)
            .await
    }

    /// Gets all favorite character entries for the provided user ID in insertion order
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_character::Model>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await
    }
}

pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new favorite planet edge, see [`FavoriteCharacterRepository::create`]
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
        user_characteristics: String,
    ) -> Result<entity::favorite_planet::Model, DbErr> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planets_id: ActiveValue::Set(planet_id),
            user_characteristics: ActiveValue::Set(Some(user_characteristics)),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_user_and_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<entity::favorite_planet::Model>, DbErr> {
        entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .filter(entity::favorite_planet::Column::PlanetsId.eq(planet_id))
            .one(self.db)
            .await
    }

    /// Gets all favorite planet entries for the provided user ID in insertion order
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_planet::Model>, DbErr> {
        entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planet::Column::Id)
            .all(self.db)
            .await
    }
}
