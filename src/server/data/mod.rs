//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table (or a table plus the relation it is
//! always read with) and return raw `DbErr`s; business rules live in the service layer.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
