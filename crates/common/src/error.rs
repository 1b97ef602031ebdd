//! Unified error type for the groupie tracker.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Upstream API error (status={status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to refresh artist data: {0}")]
    Refresh(String),

    #[error("Invalid query type `{value}` for {clause} query")]
    InvalidClause { clause: &'static str, value: String },

    #[error("Invalid {clause} query date `{value}`: {reason}")]
    InvalidDate {
        clause: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid first album date format: {value}, for artist: {artist}")]
    InvalidAlbumDate { artist: String, value: String },

    #[error("Concert location index is not available yet")]
    IndexUnavailable,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// True for errors caused by the caller's query rather than by us or upstream.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidClause { .. } | Error::InvalidDate { .. } | Error::InvalidAlbumDate { .. }
        )
    }

    /// True for failures talking to the upstream API.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Upstream { .. } | Error::Refresh(_)
        )
    }
}
