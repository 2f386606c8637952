//! Blocking (synchronous) API for plain-thread callers.
//!
//! Wraps the async [`FeedClient`] with a current-thread Tokio runtime so
//! callers don't need to manage their own async runtime.

use quakemap_core::{Earthquake, PlateBoundaries};

use crate::client::{FeedClient, FeedClientOptions};
use crate::error::{FeedError, Result};

/// Blocking wrapper around [`FeedClient`].
pub struct FeedClientBlocking {
    rt: tokio::runtime::Runtime,
    inner: FeedClient,
}

impl FeedClientBlocking {
    /// Create a blocking feed client.
    pub fn new(options: FeedClientOptions) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| FeedError::Runtime(e.to_string()))?;

        let inner = FeedClient::new(options)?;

        Ok(Self { rt, inner })
    }

    /// Fetch and convert the earthquake summary feed (blocking).
    pub fn fetch_earthquakes(&self, url: &str) -> Result<Vec<Earthquake>> {
        self.rt.block_on(self.inner.fetch_earthquakes(url))
    }

    /// Fetch and convert the plate boundary dataset (blocking).
    pub fn fetch_plate_boundaries(&self, url: &str) -> Result<PlateBoundaries> {
        self.rt.block_on(self.inner.fetch_plate_boundaries(url))
    }
}

/// One-shot convenience: fetch the earthquake feed with default options.
pub fn fetch_earthquakes(url: &str) -> Result<Vec<Earthquake>> {
    FeedClientBlocking::new(FeedClientOptions::default())?.fetch_earthquakes(url)
}

/// One-shot convenience: fetch the plate boundaries with default options.
pub fn fetch_plate_boundaries(url: &str) -> Result<PlateBoundaries> {
    FeedClientBlocking::new(FeedClientOptions::default())?.fetch_plate_boundaries(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_client_builds() {
        assert!(FeedClientBlocking::new(FeedClientOptions::default()).is_ok());
    }
}
