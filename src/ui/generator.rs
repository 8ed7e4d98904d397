//! Sample data generator panel
//!
//! Parameter widgets for sample count, voltage bounds, date bounds, fub-id
//! selection, and output filename, plus the Generate and Save CSV actions.
//! Each button click runs a plain handler that replaces the panel's dataset;
//! nothing recomputes implicitly.

use chrono::NaiveDate;
use eframe::egui;

use crate::data::{
    self, DataError, GeneratorConfig, SampleTable, ALLOWED_FUB_IDS, MAX_SAMPLES, VOLTAGE_MAX,
    VOLTAGE_MIN,
};

/// Format used by the date text inputs
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Generator panel state
pub struct GeneratorPanel {
    pub config: GeneratorConfig,

    /// Draft text for the start date, parsed on Generate
    pub start_input: String,
    /// Draft text for the end date, parsed on Generate
    pub end_input: String,

    /// Current dataset; None until the first Generate
    table: Option<SampleTable>,

    /// Last action outcome shown in the panel (message, is_error)
    status: Option<(String, bool)>,
}

impl Default for GeneratorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorPanel {
    pub fn new() -> Self {
        let config = GeneratorConfig::default();
        let start_input = config.start_date.format(DATE_FORMAT).to_string();
        let end_input = config.end_date.format(DATE_FORMAT).to_string();

        Self {
            config,
            start_input,
            end_input,
            table: None,
            status: None,
        }
    }

    /// Re-derive the date input texts from the config (after settings load)
    pub fn sync_date_inputs(&mut self) {
        self.start_input = self.config.start_date.format(DATE_FORMAT).to_string();
        self.end_input = self.config.end_date.format(DATE_FORMAT).to_string();
    }

    /// Rows in the current dataset, if one exists
    pub fn row_count(&self) -> Option<usize> {
        self.table.as_ref().map(|t| t.len())
    }

    /// Draw the panel
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Sample Data");
        ui.separator();

        ui.add(
            egui::Slider::new(&mut self.config.samples, 0..=MAX_SAMPLES)
                .text("Samples")
                .logarithmic(true),
        );

        ui.separator();
        ui.label("Voltage bounds:");
        // Each bound's range is capped by the other, so low <= high always holds
        let (low, high) = (self.config.voltage_low, self.config.voltage_high);
        ui.horizontal(|ui| {
            ui.label("Low:");
            ui.add(
                egui::DragValue::new(&mut self.config.voltage_low)
                    .speed(0.1)
                    .range(VOLTAGE_MIN..=high),
            );
            ui.label("High:");
            ui.add(
                egui::DragValue::new(&mut self.config.voltage_high)
                    .speed(0.1)
                    .range(low..=VOLTAGE_MAX),
            );
        });

        ui.separator();
        ui.label("Date span:");
        ui.horizontal(|ui| {
            ui.label("Start:");
            ui.add(
                egui::TextEdit::singleline(&mut self.start_input)
                    .desired_width(90.0)
                    .hint_text("YYYY-MM-DD"),
            );
        });
        ui.horizontal(|ui| {
            ui.label("End:");
            ui.add(
                egui::TextEdit::singleline(&mut self.end_input)
                    .desired_width(90.0)
                    .hint_text("YYYY-MM-DD"),
            );
        });

        ui.separator();
        ui.label("Fub ids:");
        for id in ALLOWED_FUB_IDS {
            let mut selected = self.config.fub_ids.iter().any(|f| f == id);
            if ui.checkbox(&mut selected, *id).changed() {
                if selected {
                    self.config.fub_ids.push(id.to_string());
                    self.config
                        .fub_ids
                        .sort_by_key(|f| ALLOWED_FUB_IDS.iter().position(|a| a == f));
                } else {
                    self.config.fub_ids.retain(|f| f != id);
                }
            }
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Filename:");
            ui.add(
                egui::TextEdit::singleline(&mut self.config.filename)
                    .desired_width(140.0),
            );
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("⟳ Generate").clicked() {
                self.regenerate();
            }
            if ui.button("💾 Save CSV").clicked() {
                self.save_csv();
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

        if let Some(count) = self.row_count() {
            ui.small(format!("Current dataset: {} rows", count));
        }
    }

    /// Parse the date inputs into the config
    fn apply_date_inputs(&mut self) -> Result<(), DataError> {
        let start = NaiveDate::parse_from_str(self.start_input.trim(), DATE_FORMAT)
            .map_err(|_| {
                DataError::Config(format!("start date {:?} is not YYYY-MM-DD", self.start_input))
            })?;
        let end = NaiveDate::parse_from_str(self.end_input.trim(), DATE_FORMAT)
            .map_err(|_| {
                DataError::Config(format!("end date {:?} is not YYYY-MM-DD", self.end_input))
            })?;

        self.config.start_date = start;
        self.config.end_date = end;
        Ok(())
    }

    /// Replace the current dataset with a freshly drawn one
    fn regenerate(&mut self) {
        let result = self
            .apply_date_inputs()
            .and_then(|_| data::generate(&self.config, &mut rand::rng()));

        match result {
            Ok(table) => {
                self.status = Some((format!("Generated {} rows", table.len()), false));
                self.table = Some(table);
            }
            Err(e) => {
                log::warn!("Generation failed: {}", e);
                self.status = Some((e.to_string(), true));
            }
        }
    }

    /// Serialize the current dataset and write it where the user chooses
    fn save_csv(&mut self) {
        let Some(table) = &self.table else {
            let err = DataError::NoData;
            log::warn!("Save requested with no dataset");
            self.status = Some((err.to_string(), true));
            return;
        };

        // Re-read the filename each time the dialog opens
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&self.config.filename)
            .add_filter("CSV Files", &["csv"])
            .add_filter("All Files", &["*"])
            .save_file()
        else {
            return;
        };

        let result = data::to_csv(table)
            .and_then(|csv| std::fs::write(&path, csv).map_err(DataError::from));

        match result {
            Ok(()) => {
                log::info!("Saved {} rows to {}", table.len(), path.display());
                let filename = path.file_name().unwrap_or_default().to_string_lossy();
                self.status = Some((format!("Saved {} rows to {}", table.len(), filename), false));
            }
            Err(e) => {
                log::warn!("Save failed: {}", e);
                self.status = Some((e.to_string(), true));
            }
        }
    }
}
