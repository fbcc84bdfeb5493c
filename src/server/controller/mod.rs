//! HTTP controller endpoints for the Holonet API.
//!
//! Axum handlers for catalog reads, favorite creation and the sitemap. Controllers extract
//! request data, call a service and turn its result into a response; every error is converted
//! by [`Error`](crate::server::error::Error)'s `IntoResponse` implementation. Handlers are
//! annotated with `utoipa::path` so the router can build the OpenAPI document from them.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;
