//! Database model type aliases for test utilities, matching those in the main crate.

pub type UserModel = entity::user::Model;

pub type CharacterModel = entity::character::Model;

pub type PlanetModel = entity::planet::Model;

pub type FavoriteCharacterModel = entity::favorite_character::Model;

pub type FavoritePlanetModel = entity::favorite_planet::Model;
