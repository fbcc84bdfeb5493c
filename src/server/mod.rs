//! Server application core modules.
//!
//! This module contains all server-side functionality for Holonet: HTTP routing, request
//! handling, catalog business rules and database access. Requests flow linearly through
//! `controller` -> `service` -> `data`, with `error` mapping every failure to an HTTP response.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
