//! Per-event marker styling and popup content.

use quakemap_core::Earthquake;

use crate::depth::color_for_depth;
use crate::radius::magnitude_radius;

/// Marker stroke color.
pub const STROKE_COLOR: &str = "#000000";
/// Stroke and fill opacity shared by all markers.
pub const MARKER_OPACITY: f32 = 0.5;
/// Stroke width in pixels.
pub const STROKE_WEIGHT: f32 = 0.5;

/// Resolved display style for one earthquake marker.
///
/// Computed per feature at render time; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    /// Fill color, from the event depth.
    pub fill_color: &'static str,
    /// Stroke color.
    pub color: &'static str,
    pub opacity: f32,
    pub fill_opacity: f32,
    /// Radius in pixels, from the event magnitude.
    pub radius: f64,
    /// Stroke width in pixels.
    pub weight: f32,
    /// Whether the stroke is drawn at all.
    pub stroke: bool,
}

/// Style one earthquake: fill from depth, radius from magnitude, the rest
/// fixed constants.
pub fn marker_style(quake: &Earthquake) -> MarkerStyle {
    MarkerStyle {
        fill_color: color_for_depth(quake.depth_km),
        color: STROKE_COLOR,
        opacity: MARKER_OPACITY,
        fill_opacity: MARKER_OPACITY,
        radius: magnitude_radius(quake.magnitude),
        weight: STROKE_WEIGHT,
        stroke: true,
    }
}

/// Popup content as (label, value) pairs, for native UI rendering.
pub fn popup_fields(quake: &Earthquake) -> [(&'static str, String); 3] {
    [
        ("Magnitude", format!("{}", quake.magnitude)),
        ("Depth", format!("{}", quake.depth_km)),
        ("Location", quake.place_or_unknown().to_string()),
    ]
}

/// Popup content as one HTML string, with bold values and `<br>`
/// separators.
pub fn popup_html(quake: &Earthquake) -> String {
    popup_fields(quake)
        .iter()
        .map(|(label, value)| format!("{label}: <b>{value}</b>"))
        .collect::<Vec<_>>()
        .join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quake() -> Earthquake {
        Earthquake::from_point(&[-119.0, 36.0, 45.0], 5.0, Some("Central California".into()))
            .unwrap()
    }

    #[test]
    fn styles_the_reference_event() {
        let style = marker_style(&sample_quake());
        assert_eq!(style.fill_color, "#fc8403");
        assert_eq!(style.radius, 25.0);
        assert_eq!(style.color, "#000000");
        assert_eq!(style.opacity, 0.5);
        assert_eq!(style.fill_opacity, 0.5);
        assert_eq!(style.weight, 0.5);
        assert!(style.stroke);
    }

    #[test]
    fn zero_magnitude_marker_keeps_minimum_radius() {
        let quake = Earthquake::from_point(&[0.0, 0.0, 5.0], 0.0, None).unwrap();
        assert_eq!(marker_style(&quake).radius, 1.0);
    }

    #[test]
    fn popup_interpolates_event_fields() {
        let html = popup_html(&sample_quake());
        assert!(html.contains("Magnitude: <b>5</b>"));
        assert!(html.contains("Depth: <b>45</b>"));
        assert!(html.contains("Location: <b>Central California</b>"));
    }

    #[test]
    fn popup_fields_match_the_html() {
        let quake = sample_quake();
        let fields = popup_fields(&quake);
        assert_eq!(fields[0], ("Magnitude", "5".to_string()));
        assert_eq!(fields[1], ("Depth", "45".to_string()));
        assert_eq!(fields[2], ("Location", "Central California".to_string()));
    }

    #[test]
    fn popup_falls_back_for_unnamed_events() {
        let quake = Earthquake::from_point(&[0.0, 0.0, 5.0], 1.2, None).unwrap();
        assert!(popup_html(&quake).contains("Location: <b>unknown</b>"));
    }
}
