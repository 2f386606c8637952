//! Depth legend entries.

use crate::depth::DepthBucket;

/// One legend row: the display lower bound and its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    /// Lower display bound in kilometers.
    pub lower_km: f64,
    /// CSS color, identical to the marker fill for this depth range.
    pub color: &'static str,
}

/// The six legend entries, shallowest first.
pub fn entries() -> Vec<LegendEntry> {
    DepthBucket::ALL
        .iter()
        .map(|bucket| LegendEntry {
            lower_km: bucket.lower_bound_km(),
            color: bucket.color(),
        })
        .collect()
}

/// Row labels, in entry order: `"{lower}km – {next}km"` for bounded
/// ranges, `"{lower}+"` for the open-ended deepest entry.
pub fn labels() -> Vec<String> {
    let entries = entries();
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entries.get(i + 1) {
            Some(next) => format!("{}km – {}km", entry.lower_km, next.lower_km),
            None => format!("{}+", entry.lower_km),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_entries_in_depth_order() {
        let entries = entries();
        let expected = [
            (-10.0, "green"),
            (10.0, "#cafc03"),
            (30.0, "#fcad03"),
            (50.0, "#fc8403"),
            (70.0, "#fc4903"),
            (90.0, "red"),
        ];
        assert_eq!(entries.len(), expected.len());
        for (entry, (lower, color)) in entries.iter().zip(expected) {
            assert_eq!(entry.lower_km, lower);
            assert_eq!(entry.color, color);
        }
    }

    #[test]
    fn range_labels_with_open_ended_last() {
        assert_eq!(
            labels(),
            vec![
                "-10km – 10km",
                "10km – 30km",
                "30km – 50km",
                "50km – 70km",
                "70km – 90km",
                "90+",
            ]
        );
    }

    #[test]
    fn legend_colors_track_the_marker_colors() {
        use crate::depth::color_for_depth;

        // A depth just above each lower bound must render in that entry's
        // color, keeping the legend consistent with the markers.
        for entry in entries() {
            assert_eq!(color_for_depth(entry.lower_km + 1.0), entry.color);
        }
    }
}
