//! Layer control panel: basemap selection and overlay toggles.

use egui::Ui;

use crate::basemap::Basemap;
use crate::state::{LayerStack, LoadState, OverlayId};

/// Actions returned from the layer control panel.
pub enum LayerAction {
    /// Switch the active basemap (mutually exclusive).
    SelectBasemap(Basemap),
    /// Toggle an overlay on or off.
    ToggleOverlay(OverlayId),
    /// No action.
    None,
}

/// Show the layer control panel.
pub fn show_layers(ui: &mut Ui, active_basemap: Basemap, layers: &LayerStack) -> LayerAction {
    let mut action = LayerAction::None;

    ui.heading("Layers");
    ui.separator();

    ui.label("Basemap");
    for &basemap in Basemap::ALL {
        let selected = basemap == active_basemap;
        if ui.radio(selected, basemap.name()).clicked() && !selected {
            action = LayerAction::SelectBasemap(basemap);
        }
    }

    ui.separator();
    ui.label("Overlays");
    for &overlay in OverlayId::ALL {
        let (state, count) = layers.status(overlay);

        ui.horizontal(|ui| {
            let mut shown = layers.visible(overlay);
            if ui.checkbox(&mut shown, overlay.name()).changed() {
                action = LayerAction::ToggleOverlay(overlay);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match state {
                    LoadState::Loading => {
                        ui.spinner();
                    }
                    LoadState::Loaded => {
                        ui.weak(format!("{count}"));
                    }
                    LoadState::Failed => {
                        ui.weak("unavailable");
                    }
                }
            });
        });
    }

    action
}
