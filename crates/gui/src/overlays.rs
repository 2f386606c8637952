//! Walkers plugins drawing the two data overlays.

use egui::{Color32, Stroke, Ui};
use geo_types::LineString;
use walkers::{lon_lat, MapMemory, Plugin, Projector};

use quakemap_core::Earthquake;
use quakemap_style::{marker_style, popup_fields, Rgb};

/// Plate boundary stroke: yellow, weight 1.
const PLATE_COLOR: Color32 = Color32::YELLOW;
const PLATE_WEIGHT: f32 = 1.0;

/// Markers smaller than this still register clicks.
const MIN_HIT_RADIUS: f32 = 6.0;

/// Convert a CSS style color to egui with the style's opacity applied.
fn css_color(css: &str, opacity: f32) -> Color32 {
    let rgb = Rgb::from_css(css).unwrap_or(Rgb::new(0, 0, 0));
    let alpha = (opacity * 255.0) as u8;
    Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, alpha)
}

/// Plugin drawing plate boundaries as polylines. No popups.
pub struct PlateOverlay<'a> {
    pub lines: &'a [LineString<f64>],
}

impl Plugin for PlateOverlay<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        _response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let painter = ui.painter();
        let stroke = Stroke::new(PLATE_WEIGHT, PLATE_COLOR);

        for line in self.lines {
            let mut previous: Option<egui::Pos2> = None;
            for coord in line.coords() {
                let projected = projector.project(lon_lat(coord.x, coord.y));
                let point = egui::pos2(projected.x, projected.y);
                if let Some(prev) = previous {
                    painter.line_segment([prev, point], stroke);
                }
                previous = Some(point);
            }
        }
    }
}

/// Plugin drawing earthquake circle markers and the click popup.
pub struct EarthquakeOverlay<'a> {
    pub quakes: &'a [Earthquake],
    /// Click selection, owned by the app so the popup survives frames.
    pub selected: &'a mut Option<Earthquake>,
}

impl Plugin for EarthquakeOverlay<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let painter = ui.painter();

        let mut markers = Vec::with_capacity(self.quakes.len());
        for quake in self.quakes {
            let style = marker_style(quake);
            let projected = projector.project(lon_lat(quake.lon, quake.lat));
            let center = egui::pos2(projected.x, projected.y);
            let radius = style.radius as f32;
            markers.push((center, radius));

            if radius <= 0.0 {
                // Negative-magnitude events project to a degenerate
                // marker; nothing to draw.
                continue;
            }

            let fill = css_color(style.fill_color, style.fill_opacity);
            let stroke = if style.stroke {
                Stroke::new(style.weight, css_color(style.color, style.opacity))
            } else {
                Stroke::NONE
            };
            painter.circle(center, radius, fill, stroke);
        }

        if response.clicked() {
            *self.selected = response
                .interact_pointer_pos()
                .and_then(|click| hit_test(self.quakes, &markers, click));
        }

        if let Some(quake) = self.selected.clone() {
            show_popup(ui, projector, &quake);
        }
    }
}

/// Topmost marker under the pointer, if any.
fn hit_test(
    quakes: &[Earthquake],
    markers: &[(egui::Pos2, f32)],
    click: egui::Pos2,
) -> Option<Earthquake> {
    quakes
        .iter()
        .zip(markers)
        .rev()
        .find(|(_, (center, radius))| center.distance(click) <= radius.max(MIN_HIT_RADIUS))
        .map(|(quake, _)| quake.clone())
}

/// Floating popup anchored above the selected marker.
fn show_popup(ui: &Ui, projector: &Projector, quake: &Earthquake) {
    let projected = projector.project(lon_lat(quake.lon, quake.lat));
    let anchor = egui::pos2(projected.x, projected.y - 12.0);

    egui::Area::new(egui::Id::new("quake_popup"))
        .pivot(egui::Align2::CENTER_BOTTOM)
        .fixed_pos(anchor)
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                for (label, value) in popup_fields(quake) {
                    ui.horizontal(|ui| {
                        ui.label(format!("{label}:"));
                        ui.label(egui::RichText::new(value).strong());
                    });
                }
            });
        });
}
