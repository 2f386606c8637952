//! Tectonic plate boundary polylines.

use geo_types::LineString;

/// Plate boundary polylines in WGS-84 lon/lat order.
///
/// MultiLineString features from the source dataset are flattened into
/// individual lines. The collection is populated once at load time and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlateBoundaries {
    lines: Vec<LineString<f64>>,
}

impl PlateBoundaries {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn from_lines(lines: Vec<LineString<f64>>) -> Self {
        Self { lines }
    }

    pub fn push(&mut self, line: LineString<f64>) {
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineString<f64>> {
        self.lines.iter()
    }
}

impl IntoIterator for PlateBoundaries {
    type Item = LineString<f64>;
    type IntoIter = std::vec::IntoIter<LineString<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Coord;

    fn line(points: &[(f64, f64)]) -> LineString<f64> {
        LineString::from(
            points
                .iter()
                .map(|&(x, y)| Coord { x, y })
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn push_and_iterate() {
        let mut boundaries = PlateBoundaries::new();
        assert!(boundaries.is_empty());

        boundaries.push(line(&[(0.0, 0.0), (1.0, 1.0)]));
        boundaries.push(line(&[(2.0, 2.0), (3.0, 3.0)]));

        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries.iter().count(), 2);
    }

    #[test]
    fn into_iterator_consumes_lines() {
        let boundaries = PlateBoundaries::from_lines(vec![line(&[(0.0, 0.0), (1.0, 1.0)])]);
        let collected: Vec<_> = boundaries.into_iter().collect();
        assert_eq!(collected.len(), 1);
    }
}
