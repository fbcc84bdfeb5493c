use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        character::CharacterDto, favorite::UserFavoritesDto, planet::PlanetDto, user::UserDto,
    },
    server::{
        data::{
            character::CharacterRepository,
            favorite::{FavoriteCharacterRepository, FavoritePlanetRepository},
            planet::PlanetRepository,
            user::UserRepository,
        },
        error::Error,
    },
};

/// Service for reading users and the favorites they have collected.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user ordered by name.
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo.get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Retrieves every character and planet favorited by a user.
    ///
    /// Each favorite edge is resolved to its target and serialized in the order the favorites
    /// were created. An edge whose target no longer resolves is skipped with a warning.
    ///
    /// # Returns
    /// - `Ok(Some(UserFavoritesDto))` - User found, lists may be empty
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Option<UserFavoritesDto>, Error> {
        let user_repo = UserRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);
        let planet_repo = PlanetRepository::new(self.db);
        let favorite_character_repo = FavoriteCharacterRepository::new(self.db);
        let favorite_planet_repo = FavoritePlanetRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Ok(None);
        }

        let favorite_characters = favorite_character_repo.get_many_by_user_id(user_id).await?;
        let favorite_planets = favorite_planet_repo.get_many_by_user_id(user_id).await?;

        let character_ids = favorite_characters.iter().map(|f| f.characters_id).collect();
        let characters: HashMap<i32, CharacterDto> = character_repo
            .get_many_with_homeplanet_by_ids(character_ids)
            .await?
            .into_iter()
            .map(|(character, homeplanet)| (character.id, CharacterDto::from((character, homeplanet))))
            .collect();

        let planet_ids = favorite_planets.iter().map(|f| f.planets_id).collect();
        let planets: HashMap<i32, PlanetDto> = planet_repo
            .get_many_by_ids(planet_ids)
            .await?
            .into_iter()
            .map(|planet| (planet.id, PlanetDto::from(planet)))
            .collect();

        let characters = favorite_characters
            .iter()
            .filter_map(|favorite| {
                let character = characters.get(&favorite.characters_id).cloned();
                if character.is_none() {
                    tracing::warn!(
                        user_id = %user_id,
                        favorite_id = %favorite.id,
                        "Favorite references character ID {} which does not exist, skipping",
                        favorite.characters_id
                    );
                }
                character
            })
            .collect();

        let planets = favorite_planets
            .iter()
            .filter_map(|favorite| {
                let planet = planets.get(&favorite.planets_id).cloned();
                if planet.is_none() {
                    tracing::warn!(
                        user_id = %user_id,
                        favorite_id = %favorite.id,
                        "Favorite references planet ID {} which does not exist, skipping",
                        favorite.planets_id
                    );
                }
                planet
            })
            .collect();

        Ok(Some(UserFavoritesDto {
            characters,
            planets,
        }))
    }
}
