//! Integration tests for the feed crate.
//!
//! Tests marked `#[ignore]` require network access and the live feed
//! endpoints. Run with: `cargo test -p quakemap-feed -- --ignored`

use quakemap_feed::{FeatureCollection, FeedClient, FeedClientOptions};
use quakemap_feed::{EARTHQUAKE_FEED_URL, PLATE_FEED_URL};

/// A trimmed-down excerpt in the shape of the USGS weekly summary.
const EARTHQUAKE_FIXTURE: &str = r#"{
    "type": "FeatureCollection",
    "metadata": { "generated": 1722988800000, "title": "USGS All Earthquakes, Past Week" },
    "features": [
        {
            "type": "Feature",
            "properties": { "mag": 5.0, "place": "Central California", "time": 1722988000000 },
            "geometry": { "type": "Point", "coordinates": [-119.0, 36.0, 45.0] },
            "id": "nc00000001"
        },
        {
            "type": "Feature",
            "properties": { "mag": 0.0, "place": null, "time": 1722987000000 },
            "geometry": { "type": "Point", "coordinates": [-155.4, 19.2, 1.2] },
            "id": "hv00000002"
        },
        {
            "type": "Feature",
            "properties": { "mag": -0.3, "place": "6 km W of Cobb, CA", "time": 1722986000000 },
            "geometry": { "type": "Point", "coordinates": [-122.8, 38.8, 2.0] },
            "id": "nc00000003"
        }
    ]
}"#;

/// A trimmed-down excerpt in the shape of the PB2002 boundary dataset.
const PLATE_FIXTURE: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": { "Name": "AF-AN", "LAYER": "boundary" },
            "geometry": {
                "type": "LineString",
                "coordinates": [[-0.4, -54.8], [0.0, -54.9], [0.7, -55.0]]
            }
        },
        {
            "type": "Feature",
            "properties": { "Name": "AF-EU", "LAYER": "boundary" },
            "geometry": {
                "type": "MultiLineString",
                "coordinates": [
                    [[-24.5, 36.0], [-23.9, 36.1]],
                    [[-20.1, 37.0], [-19.5, 37.2]]
                ]
            }
        }
    ]
}"#;

#[test]
fn earthquake_fixture_parses_and_converts() {
    let collection: FeatureCollection = serde_json::from_str(EARTHQUAKE_FIXTURE).unwrap();
    assert_eq!(collection.type_, "FeatureCollection");

    let quakes = collection.earthquakes();
    assert_eq!(quakes.len(), 3);

    // Unknown top-level keys (metadata, id, time) are ignored.
    assert_eq!(quakes[0].magnitude, 5.0);
    assert_eq!(quakes[0].depth_km, 45.0);
    assert_eq!(quakes[1].place, None);
    assert_eq!(quakes[2].magnitude, -0.3);
}

#[test]
fn plate_fixture_parses_and_flattens() {
    let collection: FeatureCollection = serde_json::from_str(PLATE_FIXTURE).unwrap();
    let boundaries = collection.boundary_lines();

    // One LineString + two MultiLineString parts.
    assert_eq!(boundaries.len(), 3);

    let first = boundaries.iter().next().unwrap();
    assert_eq!(first.coords().count(), 3);
}

#[test]
fn malformed_document_is_an_error() {
    let truncated = &EARTHQUAKE_FIXTURE[..EARTHQUAKE_FIXTURE.len() / 2];
    assert!(serde_json::from_str::<FeatureCollection>(truncated).is_err());

    let wrong_shape = r#"{ "type": "FeatureCollection", "features": [{"geometry": 42}] }"#;
    assert!(serde_json::from_str::<FeatureCollection>(wrong_shape).is_err());
}

/// Fetch the live USGS weekly summary.
#[tokio::test]
#[ignore]
async fn live_earthquake_feed() {
    let client = FeedClient::new(FeedClientOptions::default()).expect("client");
    let quakes = client
        .fetch_earthquakes(EARTHQUAKE_FEED_URL)
        .await
        .expect("fetch failed");

    // The weekly feed always carries at least a few hundred events.
    assert!(!quakes.is_empty());
    println!("fetched {} earthquakes", quakes.len());
}

/// Fetch the live plate boundary dataset.
#[tokio::test]
#[ignore]
async fn live_plate_feed() {
    let client = FeedClient::new(FeedClientOptions::default()).expect("client");
    let boundaries = client
        .fetch_plate_boundaries(PLATE_FEED_URL)
        .await
        .expect("fetch failed");

    assert!(!boundaries.is_empty());
    println!("fetched {} boundary lines", boundaries.len());
}
