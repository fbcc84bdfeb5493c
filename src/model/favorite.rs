use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto};

/// Request body for marking a character as a user's favorite
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AddFavoriteCharacterDto {
    pub user_id: i32,
    pub characters_id: i32,
}

/// Request body for marking a planet as a user's favorite
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AddFavoritePlanetDto {
    pub user_id: i32,
    pub planets_id: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub characters_id: i32,
    /// Display string such as `"Leia Organa likes Han Solo"`
    pub user_characteristics: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub planets_id: i32,
    /// Display string such as `"Leia Organa likes Alderaan"`
    pub user_characteristics: Option<String>,
}

/// Every character and planet a user has marked as favorite, fully resolved
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    pub characters: Vec<CharacterDto>,
    pub planets: Vec<PlanetDto>,
}
