use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user as exposed by the API. The stored password is never part of this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub active: bool,
}
