use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("User ID {0} not found in database")]
    UserNotFound(i32),
    #[error("Character ID {0} not found in database")]
    CharacterNotFound(i32),
    #[error("Planet ID {0} not found in database")]
    PlanetNotFound(i32),
}

impl CatalogError {
    /// Message returned to API consumers as a bare JSON string
    pub fn message(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "ERROR: This is not the User you are looking for",
            Self::CharacterNotFound(_) => "ERROR: This is not the Character you are looking for",
            Self::PlanetNotFound(_) => "ERROR: This is not the Planet you are looking for",
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::NOT_FOUND, Json(self.message())).into_response()
    }
}
