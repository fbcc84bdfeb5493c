use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("Cannot add favorite for user ID {0} as it does not exist")]
    UserNotFound(i32),
    #[error("Cannot add favorite character ID {0} as it does not exist")]
    CharacterNotFound(i32),
    #[error("Cannot add favorite planet ID {0} as it does not exist")]
    PlanetNotFound(i32),
    #[error("Character ID {character_id} is already a favorite of user ID {user_id}")]
    CharacterAlreadyFavorite { user_id: i32, character_id: i32 },
    #[error("Planet ID {planet_id} is already a favorite of user ID {user_id}")]
    PlanetAlreadyFavorite { user_id: i32, planet_id: i32 },
}

impl FavoriteError {
    /// Message returned to API consumers as a bare JSON string
    pub fn message(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "ERROR: user_id does not exist",
            Self::CharacterNotFound(_) => "ERROR: character_id does not exist",
            Self::PlanetNotFound(_) => "ERROR: planet_id does not exist",
            Self::CharacterAlreadyFavorite { .. } => "ERROR: this character is already a favorite",
            Self::PlanetAlreadyFavorite { .. } => "ERROR: this planet is already a favorite",
        }
    }
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::BAD_REQUEST, Json(self.message())).into_response()
    }
}
