use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::GeneratorConfig;
use crate::render::ScatterSettings;
use crate::VoltLabApp;

/// Returns the path to the settings file: `~/.config/voltlab-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("voltlab-rs");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
///
/// Only knob positions are persisted; datasets are never written here.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Generator
    pub samples: usize,
    pub voltage_low: f64,
    pub voltage_high: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub fub_ids: Vec<String>,
    pub filename: String,

    // Layout
    pub show_generator: bool,

    // Plot display
    pub point_radius: f32,
    pub show_legend: bool,
    pub show_grid: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        let config = GeneratorConfig::default();
        let scatter = ScatterSettings::default();

        Self {
            samples: config.samples,
            voltage_low: config.voltage_low,
            voltage_high: config.voltage_high,
            start_date: config.start_date,
            end_date: config.end_date,
            fub_ids: config.fub_ids,
            filename: config.filename,

            show_generator: true,

            point_radius: scatter.point_radius,
            show_legend: scatter.show_legend,
            show_grid: scatter.show_grid,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &VoltLabApp) -> Self {
        Self {
            samples: app.generator.config.samples,
            voltage_low: app.generator.config.voltage_low,
            voltage_high: app.generator.config.voltage_high,
            start_date: app.generator.config.start_date,
            end_date: app.generator.config.end_date,
            fub_ids: app.generator.config.fub_ids.clone(),
            filename: app.generator.config.filename.clone(),

            show_generator: app.show_generator,

            point_radius: app.viewer.scatter.settings.point_radius,
            show_legend: app.viewer.scatter.settings.show_legend,
            show_grid: app.viewer.scatter.settings.show_grid,
        }
    }

    /// Apply loaded settings to the running application.
    pub fn apply(&self, app: &mut VoltLabApp) {
        app.generator.config.samples = self.samples;
        app.generator.config.voltage_low = self.voltage_low;
        app.generator.config.voltage_high = self.voltage_high;
        app.generator.config.start_date = self.start_date;
        app.generator.config.end_date = self.end_date;
        app.generator.config.fub_ids = self.fub_ids.clone();
        app.generator.config.filename = self.filename.clone();
        app.generator.sync_date_inputs();

        app.show_generator = self.show_generator;

        app.viewer.scatter.settings.point_radius = self.point_radius;
        app.viewer.scatter.settings.show_legend = self.show_legend;
        app.viewer.scatter.settings.show_grid = self.show_grid;
    }
}
