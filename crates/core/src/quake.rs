//! Earthquake event type.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One earthquake record from a GeoJSON summary feed.
///
/// `depth_km` is the third coordinate of the feed's Point geometry.
/// Negative depths (events located above the reference ellipsoid) occur in
/// real feed data and are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earthquake {
    /// Longitude in decimal degrees (WGS-84).
    pub lon: f64,
    /// Latitude in decimal degrees (WGS-84).
    pub lat: f64,
    /// Hypocenter depth in kilometers.
    pub depth_km: f64,
    /// Event magnitude.
    pub magnitude: f64,
    /// Human-readable location description, when the feed provides one.
    pub place: Option<String>,
}

impl Earthquake {
    /// Build an event from a GeoJSON Point coordinate array
    /// (`[lon, lat, depth_km]`).
    ///
    /// A missing third coordinate is treated as depth 0; fewer than two
    /// coordinates is an error.
    pub fn from_point(
        coordinates: &[f64],
        magnitude: f64,
        place: Option<String>,
    ) -> Result<Self> {
        if coordinates.len() < 2 {
            return Err(Error::InvalidCoordinates {
                expected: 2,
                got: coordinates.len(),
            });
        }

        Ok(Self {
            lon: coordinates[0],
            lat: coordinates[1],
            depth_km: coordinates.get(2).copied().unwrap_or(0.0),
            magnitude,
            place,
        })
    }

    /// Location text for display, with a fallback for unnamed events.
    pub fn place_or_unknown(&self) -> &str {
        self.place.as_deref().unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_point_full_triple() {
        let quake = Earthquake::from_point(&[-119.0, 36.0, 45.0], 5.0, None).unwrap();
        assert_eq!(quake.lon, -119.0);
        assert_eq!(quake.lat, 36.0);
        assert_eq!(quake.depth_km, 45.0);
        assert_eq!(quake.magnitude, 5.0);
    }

    #[test]
    fn missing_depth_defaults_to_zero() {
        let quake = Earthquake::from_point(&[10.0, 20.0], 1.5, None).unwrap();
        assert_eq!(quake.depth_km, 0.0);
    }

    #[test]
    fn too_few_coordinates_is_an_error() {
        let err = Earthquake::from_point(&[10.0], 1.5, None).unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinates { got: 1, .. }));
    }

    #[test]
    fn place_fallback() {
        let named = Earthquake::from_point(&[0.0, 0.0, 5.0], 2.0, Some("10km N of Somewhere".into()))
            .unwrap();
        assert_eq!(named.place_or_unknown(), "10km N of Somewhere");

        let unnamed = Earthquake::from_point(&[0.0, 0.0, 5.0], 2.0, None).unwrap();
        assert_eq!(unnamed.place_or_unknown(), "unknown");
    }
}
