//! Groupie tracker service: configuration and the HTTP API.

pub mod api;
pub mod config;

pub use api::{build_router, AppState};
