//! Voltage viewer panel
//!
//! Loads a CSV file, runs it through parse -> schema check -> sentinel
//! filter -> float coercion, and plots the surviving points as Time vs
//! Voltage. Every failure lands in the status line instead of crashing.

use eframe::egui;

use crate::data::{self, DataError, UploadedTable, VoltageSeries};
use crate::render::ScatterView;

/// Viewer panel state
pub struct ViewerPanel {
    /// Table from the last successful load
    table: Option<UploadedTable>,

    /// Plot-ready series built from `table`
    series: Vec<VoltageSeries>,

    /// Name of the loaded file, for the header line
    source_name: Option<String>,

    /// Last action outcome shown in the panel (message, is_error)
    status: Option<(String, bool)>,

    pub scatter: ScatterView,
}

impl Default for ViewerPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerPanel {
    pub fn new() -> Self {
        Self {
            table: None,
            series: Vec::new(),
            source_name: None,
            status: None,
            scatter: ScatterView::new(),
        }
    }

    /// Rows in the loaded table, if one exists
    pub fn row_count(&self) -> Option<usize> {
        self.table.as_ref().map(|t| t.len())
    }

    /// Draw the panel
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Voltage Viewer");
            ui.separator();

            if ui.button("📂 Open CSV…").clicked() {
                self.open_csv();
            }

            if let Some(name) = &self.source_name {
                ui.label(name);
            }
        });

        if let Some((message, is_error)) = &self.status {
            let color = if *is_error {
                egui::Color32::from_rgb(255, 100, 100)
            } else {
                egui::Color32::from_rgb(100, 200, 100)
            };
            ui.colored_label(color, message);
        }

        ui.separator();

        if self.series.is_empty() {
            ui.label("Open a CSV with Time and Voltage columns to plot it.");
            return;
        }

        self.scatter.show(ui, &self.series);

        if let Some(table) = &self.table {
            let plotted: usize = self.series.iter().map(|s| s.len()).sum();
            ui.small(format!(
                "{} rows, {} plotted, {} filtered as {:?}",
                table.len(),
                plotted,
                table.sentinel_count(),
                data::SENTINEL_VOLTAGE,
            ));
        }
    }

    /// Pick a file and load it
    fn open_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .add_filter("All Files", &["*"])
            .pick_file()
        else {
            return;
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match std::fs::read(&path) {
            Ok(bytes) => self.load_bytes(&bytes, &name),
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                self.status = Some((DataError::Io(e).to_string(), true));
            }
        }
    }

    /// Parse and validate uploaded bytes, replacing the current table
    ///
    /// On failure the previous table stays in place and only the status
    /// line changes.
    pub fn load_bytes(&mut self, bytes: &[u8], source_name: &str) {
        let result = data::parse_upload(bytes)
            .and_then(|table| data::build_series(&table).map(|series| (table, series)));

        match result {
            Ok((table, series)) => {
                log::info!("Loaded {} rows from {}", table.len(), source_name);
                self.status = Some((format!("Loaded {} rows", table.len()), false));
                self.source_name = Some(source_name.to_string());
                self.table = Some(table);
                self.series = series;
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}", source_name, e);
                self.status = Some((e.to_string(), true));
            }
        }
    }
}
