//! Basemap tile sources and per-source walkers state.

use walkers::sources::{Attribution, Mapbox, MapboxStyle, OpenStreetMap, TileSource};
use walkers::{lon_lat, HttpTiles, Map, MapMemory, Position, TileId};

/// Initial view center (California) and zoom.
pub const DEFAULT_CENTER_LON: f64 = -119.4179;
pub const DEFAULT_CENTER_LAT: f64 = 36.7783;
pub const DEFAULT_ZOOM: f64 = 5.0;

/// Access token embedded for the satellite imagery source.
const MAPBOX_ACCESS_TOKEN: &str =
    "pk.eyJ1IjoibWFya2V0c3RhdCIsImEiOiJjbHJ5MzJkNnUxM3BwMmpwOGs0M21scjUzIn0.HLEOl5ouAJVHFdrYm2lcig";

/// Stamen toner-lite tiles (grayscale).
#[derive(Clone, Copy, Default)]
pub struct TonerLite;

impl TileSource for TonerLite {
    fn tile_url(&self, tile_id: TileId) -> String {
        format!(
            "https://stamen-tiles-a.a.ssl.fastly.net/toner-lite/{}/{}/{}.png",
            tile_id.zoom, tile_id.x, tile_id.y
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "Map tiles by Stamen Design, CC BY 3.0 — Map data © OpenStreetMap contributors",
            url: "http://stamen.com",
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        20
    }
}

/// The three interchangeable basemaps. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basemap {
    Streets,
    Grayscale,
    Satellite,
}

impl Basemap {
    pub const ALL: &[Basemap] = &[Basemap::Streets, Basemap::Grayscale, Basemap::Satellite];

    /// Name shown in the layer control.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Streets => "Default",
            Self::Grayscale => "Grayscale",
            Self::Satellite => "Satellite",
        }
    }
}

/// Persistent basemap state: one tile pipeline per source plus the shared
/// map memory (pan/zoom), which survives basemap switches.
pub struct BasemapSet {
    streets: HttpTiles,
    grayscale: HttpTiles,
    satellite: HttpTiles,
    memory: MapMemory,
    center: Position,
    pub active: Basemap,
}

impl BasemapSet {
    /// Build all three tile pipelines up front so switching is instant.
    pub fn new(ctx: &egui::Context) -> Self {
        let satellite_source = Mapbox {
            style: MapboxStyle::Satellite,
            access_token: MAPBOX_ACCESS_TOKEN.to_string(),
            high_resolution: false,
        };

        let mut memory = MapMemory::default();
        let _ = memory.set_zoom(DEFAULT_ZOOM);

        Self {
            streets: HttpTiles::new(OpenStreetMap, ctx.clone()),
            grayscale: HttpTiles::new(TonerLite, ctx.clone()),
            satellite: HttpTiles::new(satellite_source, ctx.clone()),
            memory,
            center: lon_lat(DEFAULT_CENTER_LON, DEFAULT_CENTER_LAT),
            active: Basemap::Streets,
        }
    }

    /// The walkers map widget for the active basemap.
    pub fn map(&mut self) -> Map<'_, '_, '_> {
        let center = self.center;
        let tiles = match self.active {
            Basemap::Streets => &mut self.streets,
            Basemap::Grayscale => &mut self.grayscale,
            Basemap::Satellite => &mut self.satellite,
        };
        Map::new(Some(tiles), &mut self.memory, center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toner_lite_tile_url() {
        let url = TonerLite.tile_url(TileId {
            x: 1,
            y: 2,
            zoom: 3,
        });
        assert_eq!(
            url,
            "https://stamen-tiles-a.a.ssl.fastly.net/toner-lite/3/1/2.png"
        );
    }

    #[test]
    fn three_basemaps_with_streets_default() {
        assert_eq!(Basemap::ALL.len(), 3);
        assert_eq!(Basemap::Streets.name(), "Default");
    }
}
