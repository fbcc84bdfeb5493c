use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, character::CharacterDto},
    server::{
        error::{api::ApiError, catalog::CatalogError, Error},
        model::app::AppState,
        service::character::CharacterService,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// Get all characters ordered by name
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when retrieving characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let characters = character_service.get_all_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a single character
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Success when retrieving character", body = CharacterDto),
        (status = 400, description = "Character ID is not an integer", body = ErrorDto),
        (status = 404, description = "Character not found", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    character_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = character_id.map_err(ApiError::from)?;
    let character_service = CharacterService::new(&state.db);

    let character = character_service
        .get_character(character_id)
        .await?
        .ok_or(CatalogError::CharacterNotFound(character_id))?;

    Ok((StatusCode::OK, Json(character)))
}
