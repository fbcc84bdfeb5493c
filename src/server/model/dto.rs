//! Conversions from database models into the DTOs served by the API.
//!
//! These conversions are the only place where stored fields are dropped (`password`,
//! `creation_date`) or renamed (`is_active` -> `active`).

use crate::{
    model::{
        character::CharacterDto,
        favorite::{FavoriteCharacterDto, FavoritePlanetDto},
        planet::PlanetDto,
        user::UserDto,
    },
    server::model::db::{
        CharacterModel, FavoriteCharacterModel, FavoritePlanetModel, PlanetModel, UserModel,
    },
};

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            active: user.is_active,
        }
    }
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            region: planet.region,
            sector: planet.sector,
            system: planet.system,
            inhabitants: planet.inhabitants,
            capital_city: planet.capital_city,
            coordinates: planet.coordinates,
        }
    }
}

/// A character paired with its home planet, as returned by the character repository
impl From<(CharacterModel, Option<PlanetModel>)> for CharacterDto {
    fn from((character, homeplanet): (CharacterModel, Option<PlanetModel>)) -> Self {
        Self {
            id: character.id,
            name: character.name,
            species: character.species,
            homeplanet_name: homeplanet.map(|planet| planet.name),
            gender: character.gender,
        }
    }
}

impl From<FavoriteCharacterModel> for FavoriteCharacterDto {
    fn from(favorite: FavoriteCharacterModel) -> Self {
        Self {
            id: favorite.id,
            characters_id: favorite.characters_id,
            user_characteristics: favorite.user_characteristics,
        }
    }
}

impl From<FavoritePlanetModel> for FavoritePlanetDto {
    fn from(favorite: FavoritePlanetModel) -> Self {
        Self {
            id: favorite.id,
            planets_id: favorite.planets_id,
            user_characteristics: favorite.user_characteristics,
        }
    }
}
