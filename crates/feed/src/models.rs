//! GeoJSON wire models for the two map feeds.
//!
//! Lightweight serde models covering the subset of GeoJSON the USGS
//! earthquake summary and the PB2002 plate boundary dataset actually use,
//! plus conversions into the core domain types.

use geo_types::{Coord, LineString};
use serde::Deserialize;
use tracing::debug;

use quakemap_core::{Earthquake, PlateBoundaries};

/// A GeoJSON FeatureCollection document.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_: String,

    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One GeoJSON Feature.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub geometry: Option<Geometry>,

    #[serde(default)]
    pub properties: Properties,
}

/// Geometry variants used by the feeds.
///
/// Coordinate nesting follows the GeoJSON spec; positions may carry a
/// third (depth) element.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Vec<f64> },
    LineString { coordinates: Vec<Vec<f64>> },
    MultiLineString { coordinates: Vec<Vec<Vec<f64>>> },
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
}

/// Feature properties; only the fields the styler needs are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub mag: Option<f64>,

    #[serde(default)]
    pub place: Option<String>,
}

impl FeatureCollection {
    /// Extract earthquakes from the Point features.
    ///
    /// Features without a Point geometry or without a magnitude are
    /// skipped.
    pub fn earthquakes(&self) -> Vec<Earthquake> {
        let mut quakes = Vec::with_capacity(self.features.len());

        for feature in &self.features {
            let Some(Geometry::Point { coordinates }) = &feature.geometry else {
                debug!("skipping feature without Point geometry");
                continue;
            };
            let Some(mag) = feature.properties.mag else {
                debug!("skipping feature without magnitude");
                continue;
            };

            match Earthquake::from_point(coordinates, mag, feature.properties.place.clone()) {
                Ok(quake) => quakes.push(quake),
                Err(e) => debug!("skipping feature: {e}"),
            }
        }

        quakes
    }

    /// Extract boundary polylines, flattening MultiLineStrings and
    /// polygon rings.
    pub fn boundary_lines(&self) -> PlateBoundaries {
        let mut boundaries = PlateBoundaries::new();

        for feature in &self.features {
            match &feature.geometry {
                Some(Geometry::LineString { coordinates }) => {
                    if let Some(line) = to_line(coordinates) {
                        boundaries.push(line);
                    }
                }
                Some(Geometry::MultiLineString { coordinates })
                | Some(Geometry::Polygon { coordinates }) => {
                    for part in coordinates {
                        if let Some(line) = to_line(part) {
                            boundaries.push(line);
                        }
                    }
                }
                Some(Geometry::MultiPolygon { coordinates }) => {
                    for polygon in coordinates {
                        for ring in polygon {
                            if let Some(line) = to_line(ring) {
                                boundaries.push(line);
                            }
                        }
                    }
                }
                _ => debug!("skipping feature without line geometry"),
            }
        }

        boundaries
    }
}

/// Convert a GeoJSON position sequence to a lon/lat polyline.
///
/// A position with fewer than two elements invalidates the whole line, as
/// does a sequence too short to form a segment.
fn to_line(positions: &[Vec<f64>]) -> Option<LineString<f64>> {
    let mut coords = Vec::with_capacity(positions.len());
    for position in positions {
        if position.len() < 2 {
            return None;
        }
        coords.push(Coord {
            x: position[0],
            y: position[1],
        });
    }

    if coords.len() < 2 {
        None
    } else {
        Some(LineString::from(coords))
    }
}
