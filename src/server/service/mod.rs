//! Business logic services.
//!
//! Services coordinate repositories, enforce the catalog rules (existence checks, duplicate
//! favorites, derived favorite descriptions) and convert database models into DTOs.
//! Failures are never retried; they propagate to the controller as [`Error`](crate::server::error::Error).

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
