//! Main application: QuakeMapApp implements eframe::App.

use crossbeam_channel::Receiver;
use egui_dock::{DockArea, DockState, Style, TabViewer};

use quakemap_core::Earthquake;

use crate::basemap::BasemapSet;
use crate::dock::{create_dock_state, PanelId};
use crate::fetch::spawn_feed_fetches;
use crate::menu::{show_menu_bar, MenuAction};
use crate::overlays::{EarthquakeOverlay, PlateOverlay};
use crate::panels::console::show_console;
use crate::panels::layers::{show_layers, LayerAction};
use crate::panels::legend::show_legend;
use crate::state::{AppMessage, LayerStack, LogEntry, OverlayId};

/// The main application state.
pub struct QuakeMapApp {
    /// Dock state for panel layout.
    dock_state: DockState<PanelId>,

    /// Receiving end of the fetch-thread channel.
    rx: Receiver<AppMessage>,

    /// Basemap tiles and map memory (lazy: needs an egui context).
    basemaps: Option<BasemapSet>,

    /// The two data overlays.
    layers: LayerStack,

    /// Console log entries.
    logs: Vec<LogEntry>,

    /// Marker selected by a click; drives the popup.
    selected: Option<Earthquake>,

    /// Show about dialog.
    show_about: bool,
}

impl QuakeMapApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Configure dark theme with custom visuals
        let mut visuals = egui::Visuals::dark();
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        cc.egui_ctx.set_visuals(visuals);

        let (tx, rx) = crossbeam_channel::unbounded();

        let mut app = Self {
            dock_state: create_dock_state(),
            rx,
            basemaps: None,
            layers: LayerStack::new(),
            logs: Vec::new(),
            selected: None,
            show_about: false,
        };

        app.logs.push(LogEntry::info("QuakeMap started"));
        spawn_feed_fetches(tx);

        app
    }

    /// Process pending messages from the fetch threads.
    fn process_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMessage::PlatesLoaded(boundaries) => {
                    self.layers.plates.populate(boundaries.into_iter().collect());
                }

                AppMessage::EarthquakesLoaded(quakes) => {
                    self.layers.quakes.populate(quakes);
                }

                AppMessage::FeedFailed { overlay, message } => {
                    self.layers.fail(overlay);
                    self.logs
                        .push(LogEntry::error(format!("{}: {}", overlay.name(), message)));
                }

                AppMessage::Log(entry) => {
                    self.logs.push(entry);
                }
            }
        }
    }

    /// Apply a layer action from the menu or the layer control panel.
    fn handle_layer_action(&mut self, action: LayerAction) {
        match action {
            LayerAction::SelectBasemap(basemap) => {
                if let Some(basemaps) = &mut self.basemaps {
                    basemaps.active = basemap;
                }
            }
            LayerAction::ToggleOverlay(overlay) => {
                self.layers.toggle(overlay);
                // Hiding the earthquake overlay also dismisses its popup.
                if overlay == OverlayId::Earthquakes && !self.layers.quakes.visible {
                    self.selected = None;
                }
            }
            LayerAction::None => {}
        }
    }
}

impl eframe::App for QuakeMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages();

        // Keep repainting while fetches are in flight so overlays pop in
        // without user interaction.
        if self.layers.any_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        // Lazy-init the basemaps on the first frame.
        if self.basemaps.is_none() {
            self.basemaps = Some(BasemapSet::new(ctx));
        }
        let Some(basemaps) = self.basemaps.as_mut() else {
            return;
        };

        // Menu bar
        let mut menu_action = MenuAction::None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            menu_action = show_menu_bar(ui, basemaps.active, &self.layers);
        });

        // About dialog
        if self.show_about {
            egui::Window::new("About QuakeMap")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.heading("QuakeMap");
                    ui.label("Weekly earthquake activity and tectonic plate boundaries");
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    ui.label("Earthquake data: USGS · Plate boundaries: PB2002");
                    ui.separator();
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
        }

        // Main dock area
        let mut tab_viewer = QuakeMapTabViewer {
            basemaps,
            layers: &self.layers,
            logs: &self.logs,
            selected: &mut self.selected,
            layer_action: LayerAction::None,
        };

        DockArea::new(&mut self.dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(ctx, &mut tab_viewer);

        // Extract results before dropping the borrow
        let layer_action = std::mem::replace(&mut tab_viewer.layer_action, LayerAction::None);
        drop(tab_viewer);

        match menu_action {
            MenuAction::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            MenuAction::SelectBasemap(basemap) => {
                self.handle_layer_action(LayerAction::SelectBasemap(basemap));
            }
            MenuAction::ToggleOverlay(overlay) => {
                self.handle_layer_action(LayerAction::ToggleOverlay(overlay));
            }
            MenuAction::About => self.show_about = true,
            MenuAction::None => {}
        }

        self.handle_layer_action(layer_action);
    }
}

/// TabViewer implementation for egui_dock.
struct QuakeMapTabViewer<'a> {
    basemaps: &'a mut BasemapSet,
    layers: &'a LayerStack,
    logs: &'a [LogEntry],
    selected: &'a mut Option<Earthquake>,
    /// Action from the layer control panel.
    layer_action: LayerAction,
}

impl TabViewer for QuakeMapTabViewer<'_> {
    type Tab = PanelId;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.to_string().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            PanelId::Map => {
                let map_rect = ui.max_rect();

                let mut map = self.basemaps.map();
                if self.layers.plates.is_shown() {
                    map = map.with_plugin(PlateOverlay {
                        lines: self.layers.plates.items(),
                    });
                }
                if self.layers.quakes.is_shown() {
                    map = map.with_plugin(EarthquakeOverlay {
                        quakes: self.layers.quakes.items(),
                        selected: &mut *self.selected,
                    });
                }
                ui.add(map);

                show_legend(ui, map_rect);
            }

            PanelId::Layers => {
                self.layer_action = show_layers(ui, self.basemaps.active, self.layers);
            }

            PanelId::Console => {
                show_console(ui, self.logs);
            }
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false // Panels cannot be closed
    }
}
