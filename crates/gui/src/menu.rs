//! Menu bar: File, View, Help.

use egui::Ui;

use crate::basemap::Basemap;
use crate::state::{LayerStack, OverlayId};

/// Actions triggered by menu items.
pub enum MenuAction {
    Exit,
    /// Switch the active basemap.
    SelectBasemap(Basemap),
    /// Toggle an overlay on or off.
    ToggleOverlay(OverlayId),
    About,
    None,
}

/// Show the main menu bar. Returns the action triggered (if any).
pub fn show_menu_bar(ui: &mut Ui, active_basemap: Basemap, layers: &LayerStack) -> MenuAction {
    let mut action = MenuAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Exit").clicked() {
                action = MenuAction::Exit;
                ui.close_menu();
            }
        });

        ui.menu_button("View", |ui| {
            ui.menu_button("Basemap", |ui| {
                for &basemap in Basemap::ALL {
                    let is_active = basemap == active_basemap;
                    if ui.selectable_label(is_active, basemap.name()).clicked() {
                        action = MenuAction::SelectBasemap(basemap);
                        ui.close_menu();
                    }
                }
            });
            ui.menu_button("Overlays", |ui| {
                for &overlay in OverlayId::ALL {
                    let mut shown = layers.visible(overlay);
                    if ui.checkbox(&mut shown, overlay.name()).changed() {
                        action = MenuAction::ToggleOverlay(overlay);
                        ui.close_menu();
                    }
                }
            });
        });

        ui.menu_button("Help", |ui| {
            if ui.button("About QuakeMap").clicked() {
                action = MenuAction::About;
                ui.close_menu();
            }
        });
    });

    action
}
