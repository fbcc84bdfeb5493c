//! Test fixture modules for database row creation.
//!
//! Fixtures are used during phase 2 of a test, after the builder has created the schema.
//!
//! - `catalog` - users, planets, characters and the favorite edges between them

pub mod catalog;
