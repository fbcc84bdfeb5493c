//! Tests for HTTP controller endpoints.
//!
//! Each test builds the complete router over an in-memory database and sends real HTTP
//! requests through it, asserting on status codes and JSON bodies.

mod character;
mod favorite;
mod planet;
mod sitemap;
mod user;

use holonet_test_utils::prelude::*;

use crate::util::{get, post_json, TestContextExt};
