//! voltlab-rs - Voltage Sample Workbench
//!
//! Two independent panels composed only by page layout:
//! - Sample Data Generator: draws random Time/Voltage/FubId datasets within
//!   configured bounds and saves them as CSV
//! - Voltage Viewer: loads a CSV, validates it, and renders a Time-vs-Voltage
//!   scatter plot colored by fub id
//!
//! The panels share no state; a CSV file on disk is the only bridge between
//! them, crossed by explicit user action.

use eframe::egui;

mod data;
mod render;
mod settings;
mod ui;

use settings::AppSettings;
use ui::{GeneratorPanel, ViewerPanel};

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting voltlab-rs");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("voltlab-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "voltlab-rs",
        options,
        Box::new(|cc| Ok(Box::new(VoltLabApp::new(cc)))),
    )
}

/// Main application state
pub struct VoltLabApp {
    pub generator: GeneratorPanel,
    pub viewer: ViewerPanel,
    pub show_generator: bool,
}

impl VoltLabApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            generator: GeneratorPanel::new(),
            viewer: ViewerPanel::new(),
            show_generator: true,
        };
        AppSettings::load().apply(&mut app);
        app
    }
}

impl eframe::App for VoltLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("voltlab-rs");
                ui.separator();
                ui.toggle_value(&mut self.show_generator, "⚙ Generator");
                ui.separator();

                if let Some(count) = self.generator.row_count() {
                    ui.small(format!("Generated: {} rows", count));
                    ui.separator();
                }
                if let Some(count) = self.viewer.row_count() {
                    ui.small(format!("Loaded: {} rows", count));
                }
            });
        });

        // Generator panel
        if self.show_generator {
            egui::SidePanel::left("generator_panel")
                .min_width(240.0)
                .show(ctx, |ui| {
                    self.generator.ui(ui);

                    ui.separator();
                    ui.collapsing("Display", |ui| {
                        let settings = &mut self.viewer.scatter.settings;
                        ui.add(
                            egui::Slider::new(&mut settings.point_radius, 0.5..=8.0)
                                .text("Point radius"),
                        );
                        ui.checkbox(&mut settings.show_legend, "Show legend");
                        ui.checkbox(&mut settings.show_grid, "Show grid");
                    });
                });
        }

        // Main viewer display
        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewer.ui(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        AppSettings::from_app(self).save();
        log::info!("Settings saved, shutting down");
    }
}
