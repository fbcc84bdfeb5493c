//! Test utilities for the Holonet catalog API.
//!
//! Tests are written in two phases. Phase 1 declares the environment with a [`TestBuilder`]
//! (tables and catalog fixtures); phase 2 runs against the resulting [`TestContext`], which owns
//! an in-memory SQLite database and exposes fixture helpers for inserting additional rows.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{constant, TestBuilder, TestContext, TestError};
}
