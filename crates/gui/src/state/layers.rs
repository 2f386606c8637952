//! Overlay layer state.
//!
//! Each overlay is created empty at startup and populated exactly once by
//! exactly one fetch-completion message. There is no transition out of
//! `Loaded` or `Failed`, and no retry.

use geo_types::LineString;

use quakemap_core::Earthquake;

/// The two data overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayId {
    TectonicPlates,
    Earthquakes,
}

impl OverlayId {
    pub const ALL: &[OverlayId] = &[OverlayId::TectonicPlates, OverlayId::Earthquakes];

    /// Name shown in the layer control and the console.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TectonicPlates => "Tectonic Plates",
            Self::Earthquakes => "Earthquake Data",
        }
    }
}

/// Lifecycle of an overlay's backing fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// A toggleable collection of rendered features.
pub struct OverlayLayer<T> {
    items: Vec<T>,
    pub state: LoadState,
    pub visible: bool,
}

impl<T> OverlayLayer<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            state: LoadState::Loading,
            visible: true,
        }
    }

    /// Populate the layer; called once, by the fetch-completion handler.
    pub fn populate(&mut self, items: Vec<T>) {
        self.items = items;
        self.state = LoadState::Loaded;
    }

    pub fn fail(&mut self) {
        self.state = LoadState::Failed;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Whether the layer should be drawn this frame.
    pub fn is_shown(&self) -> bool {
        self.visible && !self.items.is_empty()
    }
}

/// The two overlays plus their toggle state.
pub struct LayerStack {
    pub plates: OverlayLayer<LineString<f64>>,
    pub quakes: OverlayLayer<Earthquake>,
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStack {
    pub fn new() -> Self {
        Self {
            plates: OverlayLayer::new(),
            quakes: OverlayLayer::new(),
        }
    }

    /// Mark an overlay's fetch as failed; its layer stays empty.
    pub fn fail(&mut self, id: OverlayId) {
        match id {
            OverlayId::TectonicPlates => self.plates.fail(),
            OverlayId::Earthquakes => self.quakes.fail(),
        }
    }

    /// Toggle an overlay's visibility.
    pub fn toggle(&mut self, id: OverlayId) {
        match id {
            OverlayId::TectonicPlates => self.plates.visible = !self.plates.visible,
            OverlayId::Earthquakes => self.quakes.visible = !self.quakes.visible,
        }
    }

    pub fn visible(&self, id: OverlayId) -> bool {
        match id {
            OverlayId::TectonicPlates => self.plates.visible,
            OverlayId::Earthquakes => self.quakes.visible,
        }
    }

    /// Load state and feature count for the layer control.
    pub fn status(&self, id: OverlayId) -> (LoadState, usize) {
        match id {
            OverlayId::TectonicPlates => (self.plates.state, self.plates.len()),
            OverlayId::Earthquakes => (self.quakes.state, self.quakes.len()),
        }
    }

    pub fn any_loading(&self) -> bool {
        self.plates.is_loading() || self.quakes.is_loading()
    }
}
