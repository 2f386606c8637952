//! Async feed client.
//!
//! One GET per feed, no retries, no caching. A failed fetch is reported
//! once and the corresponding overlay stays empty.

use std::time::Duration;

use tracing::debug;

use quakemap_core::{Earthquake, PlateBoundaries};

use crate::error::{FeedError, Result};
use crate::models::FeatureCollection;

/// USGS weekly earthquake summary (all magnitudes).
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 tectonic plate boundaries (Bird 2003), GeoJSON rendition.
pub const PLATE_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Configuration for [`FeedClient`].
pub struct FeedClientOptions {
    /// Per-request timeout (default 30 s).
    pub request_timeout: Duration,
}

impl Default for FeedClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Async client for the GeoJSON feeds.
pub struct FeedClient {
    client: reqwest::Client,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new(options: FeedClientOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.request_timeout)
            .build()?;

        Ok(Self { client })
    }

    /// GET a GeoJSON FeatureCollection.
    pub async fn fetch_collection(&self, url: &str) -> Result<FeatureCollection> {
        debug!("fetching {url}");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        let collection: FeatureCollection = serde_json::from_str(&body)?;
        Ok(collection)
    }

    /// Fetch and convert the earthquake summary feed.
    pub async fn fetch_earthquakes(&self, url: &str) -> Result<Vec<Earthquake>> {
        Ok(self.fetch_collection(url).await?.earthquakes())
    }

    /// Fetch and convert the plate boundary dataset.
    pub async fn fetch_plate_boundaries(&self, url: &str) -> Result<PlateBoundaries> {
        Ok(self.fetch_collection(url).await?.boundary_lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_urls_are_https_geojson() {
        for url in [EARTHQUAKE_FEED_URL, PLATE_FEED_URL] {
            assert!(url.starts_with("https://"));
            assert!(url.ends_with(".geojson") || url.ends_with(".json"));
        }
    }

    #[test]
    fn client_builds_with_default_options() {
        assert!(FeedClient::new(FeedClientOptions::default()).is_ok());
    }
}
