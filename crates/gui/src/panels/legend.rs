//! Depth legend drawn over the map.

use egui::{Align2, Color32, Ui};

use quakemap_style::{legend, Rgb};

/// Swatch size in the legend rows.
const SWATCH: f32 = 15.0;

/// Show the fixed-position depth legend in the bottom-right corner of the
/// map rect. Content derives from the six static legend entries and never
/// changes after the first frame.
pub fn show_legend(ui: &Ui, map_rect: egui::Rect) {
    egui::Area::new(egui::Id::new("depth_legend"))
        .pivot(Align2::RIGHT_BOTTOM)
        .fixed_pos(map_rect.right_bottom() - egui::vec2(12.0, 12.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::window(ui.style()).show(ui, |ui| {
                ui.strong("Depth (km)");

                for (entry, label) in legend::entries().iter().zip(legend::labels()) {
                    let rgb = Rgb::from_css(entry.color).unwrap_or(Rgb::new(0, 0, 0));
                    ui.horizontal(|ui| {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(SWATCH, SWATCH),
                            egui::Sense::hover(),
                        );
                        ui.painter_at(rect).rect_filled(
                            rect,
                            2.0,
                            Color32::from_rgb(rgb.r, rgb.g, rgb.b),
                        );
                        ui.label(label);
                    });
                }
            });
        });
}
