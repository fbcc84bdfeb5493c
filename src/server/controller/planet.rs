use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{
        error::{api::ApiError, catalog::CatalogError, Error},
        model::app::AppState,
        service::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planet";

/// Get all planets ordered by name
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planets = planet_service.get_all_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetDto),
        (status = 400, description = "Planet ID is not an integer", body = ErrorDto),
        (status = 404, description = "Planet not found", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = planet_id.map_err(ApiError::from)?;
    let planet_service = PlanetService::new(&state.db);

    let planet = planet_service
        .get_planet(planet_id)
        .await?
        .ok_or(CatalogError::PlanetNotFound(planet_id))?;

    Ok((StatusCode::OK, Json(planet)))
}
