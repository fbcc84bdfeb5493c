//! Public JSON representations returned and accepted by the HTTP API.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
