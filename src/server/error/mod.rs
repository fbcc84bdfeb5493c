//! Error types for the Holonet server.
//!
//! Domain errors live in their own modules and each implements `IntoResponse`, so handlers
//! can return `Result<_, Error>` and rely on `?` for both propagation and HTTP mapping.
//! Catalog and favorite errors reply with a literal JSON string; the generic [`ApiError`]
//! replies with a structured [`ErrorDto`].

pub mod api;
pub mod catalog;
pub mod config;
pub mod favorite;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        api::ApiError, catalog::CatalogError, config::ConfigError, favorite::FavoriteError,
    },
};

/// Main error type for the Holonet server.
///
/// Aggregates the domain errors and external library errors; `#[from]` enables conversion
/// with the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A user, character or planet requested by ID does not exist.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// A favorite could not be created.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Generic API exception carrying its own status code.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Favorite creation rejected
/// - 404 Not Found - Catalog entry not found
/// - Extractor status - Malformed request body or path
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::ApiError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
