//! Error types for feed fetching.

use thiserror::Error;

/// Errors produced while fetching or decoding a GeoJSON feed.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("core error: {0}")]
    Core(#[from] quakemap_core::Error),

    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Result alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
