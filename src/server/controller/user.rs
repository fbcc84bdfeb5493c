use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, favorite::UserFavoritesDto, user::UserDto},
    server::{
        error::{api::ApiError, catalog::CatalogError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Get all users ordered by name
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users = user_service.get_all_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when retrieving user", body = UserDto),
        (status = 400, description = "User ID is not an integer", body = ErrorDto),
        (status = 404, description = "User not found", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = user_id.map_err(ApiError::from)?;
    let user_service = UserService::new(&state.db);

    let user = user_service
        .get_user(user_id)
        .await?
        .ok_or(CatalogError::UserNotFound(user_id))?;

    Ok((StatusCode::OK, Json(user)))
}

/// Get every character and planet a user has marked as favorite
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when retrieving user favorites", body = UserFavoritesDto),
        (status = 400, description = "User ID is not an integer", body = ErrorDto),
        (status = 404, description = "User not found", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = user_id.map_err(ApiError::from)?;
    let user_service = UserService::new(&state.db);

    let favorites = user_service
        .get_user_favorites(user_id)
        .await?
        .ok_or(CatalogError::UserNotFound(user_id))?;

    Ok((StatusCode::OK, Json(favorites)))
}
