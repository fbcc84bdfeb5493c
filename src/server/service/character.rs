use sea_orm::DatabaseConnection;

use crate::{
    model::character::CharacterDto,
    server::{data::character::CharacterRepository, error::Error},
};

/// Service for reading characters with their home planet resolved.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of CharacterService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every character ordered by name.
    pub async fn get_all_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let characters = character_repo.get_all_with_homeplanet().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a single character.
    ///
    /// # Returns
    /// - `Ok(Some(CharacterDto))` - Character found, `homeplanet_name` set when it has one
    /// - `Ok(None)` - Character not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_character(&self, character_id: i32) -> Result<Option<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo
            .get_by_id_with_homeplanet(character_id)
            .await?;

        Ok(character.map(CharacterDto::from))
    }
}
