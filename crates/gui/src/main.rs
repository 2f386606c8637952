//! QuakeMap Desktop GUI
//!
//! Interactive map of the past week's earthquakes and the tectonic plate
//! boundaries they cluster along.

mod app;
mod basemap;
mod dock;
mod fetch;
mod menu;
mod overlays;
mod panels;
mod state;

use app::QuakeMapApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("QuakeMap — Earthquake Visualization")
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QuakeMap",
        native_options,
        Box::new(|cc| Ok(Box::new(QuakeMapApp::new(cc)))),
    )
}
