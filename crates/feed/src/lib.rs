//! # QuakeMap Feed
//!
//! GeoJSON feed access for QuakeMap: serde wire models for the USGS
//! earthquake summary and the PB2002 plate boundary dataset, an async
//! fetch client, and a blocking wrapper for thread-based callers.
//!
//! Fetches are single-shot: no retry, no backoff, no caching. A failed
//! fetch simply leaves the corresponding map overlay empty.

pub mod client;
pub mod error;
pub mod models;
pub mod sync_api;

pub use client::{FeedClient, FeedClientOptions, EARTHQUAKE_FEED_URL, PLATE_FEED_URL};
pub use error::{FeedError, Result};
pub use models::{Feature, FeatureCollection, Geometry, Properties};

/// Blocking API re-exported as `blocking` module.
pub mod blocking {
    pub use crate::sync_api::*;
}
