//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// Type alias for a catalog user.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `name` - Display name, used for ordering and in favorite descriptions
/// - `creation_date` - Timestamp when the user was created
/// - `email` - Unique email address
/// - `password` - Stored password, never serialized
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for a Star Wars character.
///
/// # Fields (from `entity::character::Model`)
/// - `id` - Primary key
/// - `name` - Unique character name
/// - `species` - Species (nullable)
/// - `gender` - Gender (nullable)
/// - `homeplanet_id` - Foreign key to the character's home planet (nullable)
pub type CharacterModel = entity::character::Model;

/// Type alias for a Star Wars planet.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the edge recording a user's favorite character.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Type alias for the edge recording a user's favorite planet.
pub type FavoritePlanetModel = entity::favorite_planet::Model;
