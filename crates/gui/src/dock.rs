//! Panel layout using egui_dock.
//!
//! Layout: Map (center, ~78%) | Layers (right)
//!         ────────────────────┼────────────────
//!         Console (bottom, ~20% of total height)

use egui_dock::{DockState, NodeIndex};

/// Panel identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Map,
    Layers,
    Console,
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelId::Map => write!(f, "Map"),
            PanelId::Layers => write!(f, "Layers"),
            PanelId::Console => write!(f, "Console"),
        }
    }
}

/// Create the initial dock layout.
pub fn create_dock_state() -> DockState<PanelId> {
    // Start with the map as the main surface
    let mut dock_state = DockState::new(vec![PanelId::Map]);

    // Split: main area (top) and console (bottom) — 80% / 20%
    let [top, _bottom] =
        dock_state
            .main_surface_mut()
            .split_below(NodeIndex::root(), 0.8, vec![PanelId::Console]);

    // Split top area: map (left 78%) and layer control (right)
    let [_map, _right] = dock_state
        .main_surface_mut()
        .split_right(top, 0.78, vec![PanelId::Layers]);

    dock_state
}
