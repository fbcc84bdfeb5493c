//! Server application models.
//!
//! Application state shared by every handler, type aliases for the database entity models and
//! their conversions into the public DTOs.

pub mod app;
pub mod db;
pub mod dto;
