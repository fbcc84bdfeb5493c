use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub species: Option<String>,
    /// Name of the character's home planet, if one is recorded
    pub homeplanet_name: Option<String>,
    pub gender: Option<String>,
}
