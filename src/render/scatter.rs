//! Scatter plot widget for voltage series
//!
//! Renders uploaded voltage data as Time-vs-Voltage scatter points, one
//! color per fub id, with a legend and timestamp-formatted x axis.
//!
//! ## Coordinate mapping
//!
//! Plot x values are unix timestamps in seconds; the axis formatter turns
//! them back into readable date/time labels. Y values are volts.

use std::ops::RangeInclusive;

use chrono::{DateTime, NaiveDateTime};
use eframe::egui::{self, Color32};
use egui_plot::{GridMark, Legend, Plot, PlotPoints, Points};

use crate::data::VoltageSeries;

/// Preset colors assigned to series in legend order
const SERIES_COLORS: &[Color32] = &[
    Color32::from_rgb(100, 150, 255), // Blue
    Color32::from_rgb(255, 100, 100), // Red
    Color32::from_rgb(100, 200, 100), // Green
    Color32::from_rgb(255, 200, 100), // Orange
    Color32::from_rgb(200, 100, 255), // Purple
    Color32::from_rgb(100, 255, 255), // Cyan
    Color32::from_rgb(255, 100, 200), // Pink
    Color32::from_rgb(200, 200, 100), // Yellow
];

/// Display settings for the scatter view
#[derive(Clone)]
pub struct ScatterSettings {
    /// Point radius in pixels
    pub point_radius: f32,

    /// Whether to show the legend
    pub show_legend: bool,

    /// Whether to show grid lines
    pub show_grid: bool,
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self {
            point_radius: 2.5,
            show_legend: true,
            show_grid: true,
        }
    }
}

/// Scatter plot widget
pub struct ScatterView {
    pub settings: ScatterSettings,
}

impl Default for ScatterView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterView {
    pub fn new() -> Self {
        Self {
            settings: ScatterSettings::default(),
        }
    }

    /// Draw the scatter plot into the available space
    pub fn show(&mut self, ui: &mut egui::Ui, series: &[VoltageSeries]) -> egui::Response {
        let mut plot = Plot::new("voltage_scatter")
            .show_grid(self.settings.show_grid)
            .x_axis_label("Time")
            .y_axis_label("Voltage")
            .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
                format_time_mark(mark.value)
            });

        if self.settings.show_legend {
            plot = plot.legend(Legend::default());
        }

        let radius = self.settings.point_radius;
        plot.show(ui, |plot_ui| {
            for (i, s) in series.iter().enumerate() {
                let color = SERIES_COLORS[i % SERIES_COLORS.len()];
                let points: PlotPoints = s
                    .points
                    .iter()
                    .map(|(time, voltage)| [time_to_x(*time), *voltage])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(&s.label)
                        .color(color)
                        .radius(radius),
                );
            }
        })
        .response
    }
}

/// Plot x coordinate for a timestamp (unix seconds)
pub fn time_to_x(time: NaiveDateTime) -> f64 {
    time.and_utc().timestamp() as f64
}

/// Axis label for a plot x coordinate
fn format_time_mark(x: f64) -> String {
    DateTime::from_timestamp(x as i64, 0)
        .map(|dt| dt.format("%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_x() {
        let time = NaiveDateTime::parse_from_str("2020-02-01T00:00:00", "%Y-%m-%dT%H:%M:%S")
            .unwrap();
        assert_eq!(time_to_x(time), 1580515200.0);
    }

    #[test]
    fn test_format_time_mark() {
        assert_eq!(format_time_mark(1580515200.0), "02-01 00:00");
    }

    #[test]
    fn test_format_out_of_range_mark() {
        // Absurd coordinates (panned far off the data) must not panic
        assert_eq!(format_time_mark(1e18), "");
    }
}
