use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{
            AddFavoriteCharacterDto, AddFavoritePlanetDto, FavoriteCharacterDto, FavoritePlanetDto,
        },
    },
    server::{
        error::{api::ApiError, Error},
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Mark a character as one of a user's favorites
///
/// # Responses
/// - 200 (OK): The created favorite
/// - 400 (Bad Request): Unknown user, unknown character, or the character is already a favorite
/// - 415/422 (Client Error): The request body is not valid JSON for this endpoint
#[utoipa::path(
    post,
    path = "/favorite/character",
    tag = FAVORITE_TAG,
    request_body = AddFavoriteCharacterDto,
    responses(
        (status = 200, description = "Success when adding favorite character", body = FavoriteCharacterDto),
        (status = 400, description = "Unknown user or character, or already a favorite", body = String),
        (status = 422, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    payload: Result<Json<AddFavoriteCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(ApiError::from)?;
    let favorite_service = FavoriteService::new(&state.db);

    let favorite = favorite_service
        .add_favorite_character(payload.user_id, payload.characters_id)
        .await?;

    Ok((StatusCode::OK, Json(favorite)))
}

/// Mark a planet as one of a user's favorites
///
/// # Responses
/// - 200 (OK): The created favorite
/// - 400 (Bad Request): Unknown user, unknown planet, or the planet is already a favorite
/// - 415/422 (Client Error): The request body is not valid JSON for this endpoint
#[utoipa::path(
    post,
    path = "/favorite/planet",
    tag = FAVORITE_TAG,
    request_body = AddFavoritePlanetDto,
    responses(
        (status = 200, description = "Success when adding favorite planet", body = FavoritePlanetDto),
        (status = 400, description = "Unknown user or planet, or already a favorite", body = String),
        (status = 422, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    payload: Result<Json<AddFavoritePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(ApiError::from)?;
    let favorite_service = FavoriteService::new(&state.db);

    let favorite = favorite_service
        .add_favorite_planet(payload.user_id, payload.planets_id)
        .await?;

    Ok((StatusCode::OK, Json(favorite)))
}
