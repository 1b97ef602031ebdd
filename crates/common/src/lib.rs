//! Shared types, config, and error definitions for the groupie tracker.

pub mod config;
pub mod error;
pub mod types;

pub use config::TrackerConfig;
pub use error::Error;
pub use types::*;
