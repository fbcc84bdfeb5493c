//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications. The generated
//! document feeds both Swagger UI at `/docs` and the sitemap served at `/`.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::Layer;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePathLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, sitemap::Sitemap},
    model::app::AppState,
};

pub static DOCS_PATH: &str = "/docs";
pub static OPENAPI_PATH: &str = "/docs/openapi.json";

/// Builds the API router with all endpoints and the sitemap, along with the OpenAPI
/// document generated from them.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap of every endpoint below
/// - `GET /users` / `GET /users/{id}` - List users or get one
/// - `GET /users/{id}/favorites` - Characters and planets favorited by a user
/// - `GET /characters` / `GET /characters/{id}` - List characters or get one
/// - `GET /planets` / `GET /planets/{id}` - List planets or get one
/// - `POST /favorite/character` - Mark a character as a user's favorite
/// - `POST /favorite/planet` - Mark a planet as a user's favorite
///
/// # Returns
/// A `Router<AppState>` and the OpenAPI document; use [`app`] to obtain a servable router.
pub fn routes() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet Star Wars catalog API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::favorite::add_favorite_character))
        .routes(routes!(controller::favorite::add_favorite_planet))
        .split_for_parts();

    let sitemap = Sitemap::from_openapi(&api, DOCS_PATH);

    let routes = routes
        .route("/", get(controller::sitemap::sitemap))
        .layer(Extension(Arc::new(sitemap)));

    (routes, api)
}

/// Assembles the servable application: Swagger UI, the API routes with state applied,
/// request tracing and permissive CORS.
///
/// API paths are matched with or without a trailing slash (`/users/` serves `/users`).
/// Swagger UI is routed ahead of the normalization since it redirects `/docs` to `/docs/`.
pub fn app(state: AppState) -> Router {
    let (routes, api) = routes();
    let routes = NormalizePathLayer::trim_trailing_slash().layer(routes.with_state(state));

    Router::new()
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, api))
        .fallback_service(routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
