use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::{FavoriteCharacterDto, FavoritePlanetDto},
    server::{
        data::{
            character::CharacterRepository,
            favorite::{FavoriteCharacterRepository, FavoritePlanetRepository},
            planet::PlanetRepository,
            user::UserRepository,
        },
        error::{favorite::FavoriteError, Error},
    },
};

/// Service for creating favorite edges between users and characters or planets.
///
/// The duplicate check and the insert are separate statements; two identical requests
/// racing each other can both pass the check.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a character as one of a user's favorites.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user adding the favorite
    /// - `character_id` - ID of the character to favorite
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacterDto)` - The created edge
    /// - `Err(Error::FavoriteError(FavoriteError::UserNotFound))` - User does not exist
    /// - `Err(Error::FavoriteError(FavoriteError::CharacterNotFound))` - Character does not exist
    /// - `Err(Error::FavoriteError(FavoriteError::CharacterAlreadyFavorite))` - Edge already exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);
        let favorite_repo = FavoriteCharacterRepository::new(self.db);

        let user = user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(FavoriteError::UserNotFound(user_id))?;

        let character = character_repo
            .get_by_id(character_id)
            .await?
            .ok_or(FavoriteError::CharacterNotFound(character_id))?;

        if favorite_repo
            .get_by_user_and_character(user.id, character.id)
            .await?
            .is_some()
        {
            return Err(FavoriteError::CharacterAlreadyFavorite {
                user_id,
                character_id,
            }
            .into());
        }

        let favorite = favorite_repo
            .create(
                user.id,
                character.id,
                describe_favorite(&user.name, &character.name),
            )
            .await?;

        tracing::debug!(
            user_id = %user.id,
            character_id = %character.id,
            "Added favorite character"
        );

        Ok(FavoriteCharacterDto::from(favorite))
    }

    /// Marks a planet as one of a user's favorites.
    ///
    /// Mirrors [`FavoriteService::add_favorite_character`] with the planet variants of
    /// [`FavoriteError`].
    pub async fn add_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let planet_repo = PlanetRepository::new(self.db);
        let favorite_repo = FavoritePlanetRepository::new(self.db);

        let user = user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(FavoriteError::UserNotFound(user_id))?;

        let planet = planet_repo
            .get_by_id(planet_id)
            .await?
            .ok_or(FavoriteError::PlanetNotFound(planet_id))?;

        if favorite_repo
            .get_by_user_and_planet(user.id, planet.id)
            .await?
            .is_some()
        {
            return Err(FavoriteError::PlanetAlreadyFavorite { user_id, planet_id }.into());
        }

        let favorite = favorite_repo
            .create(user.id, planet.id, describe_favorite(&user.name, &planet.name))
            .await?;

        tracing::debug!(
            user_id = %user.id,
            planet_id = %planet.id,
            "Added favorite planet"
        );

        Ok(FavoritePlanetDto::from(favorite))
    }
}

/// Display string stored on a favorite edge
fn describe_favorite(user_name: &str, target_name: &str) -> String {
    format!("{} likes {}", user_name, target_name)
}
