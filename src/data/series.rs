//! Plot series preparation
//!
//! Turns an uploaded table into scatter-plot series: sentinel rows are
//! dropped, remaining voltage cells are coerced to `f64`, and points are
//! grouped by fub id when that column exists.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use super::error::DataError;
use super::table::{UploadedTable, SENTINEL_VOLTAGE};

/// Label used when the uploaded file has no FubId column
const SINGLE_SERIES_LABEL: &str = "Voltage";

/// One scatter series: a legend label and its (time, voltage) points
#[derive(Clone, Debug, PartialEq)]
pub struct VoltageSeries {
    pub label: String,
    pub points: Vec<(NaiveDateTime, f64)>,
}

impl VoltageSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build plot series from an uploaded table
///
/// Rows whose voltage equals the sentinel marker are skipped. Any other
/// non-numeric voltage fails the whole table with `Value`; no partial
/// series are produced.
///
/// Series come back in deterministic label order (one per distinct fub id,
/// or a single series when the column is absent).
pub fn build_series(table: &UploadedTable) -> Result<Vec<VoltageSeries>, DataError> {
    // BTreeMap keeps legend order stable across loads
    let mut groups: BTreeMap<String, Vec<(NaiveDateTime, f64)>> = BTreeMap::new();

    for (i, row) in table.rows.iter().enumerate() {
        let raw = row.voltage.trim();
        if raw == SENTINEL_VOLTAGE {
            continue;
        }

        let voltage: f64 = raw.parse().map_err(|_| DataError::Value {
            row: i + 1,
            value: row.voltage.clone(),
        })?;

        let label = if table.has_fub_id {
            row.fub_id.clone().unwrap_or_default()
        } else {
            SINGLE_SERIES_LABEL.to_string()
        };

        groups.entry(label).or_default().push((row.time, voltage));
    }

    Ok(groups
        .into_iter()
        .map(|(label, points)| VoltageSeries { label, points })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::csv_io::{parse_upload, to_csv};
    use crate::data::generate::{generate, GeneratorConfig};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parse(csv: &str) -> UploadedTable {
        parse_upload(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_sentinel_rows_are_excluded() {
        let table = parse(
            "Time,Voltage\n\
             2020-02-01T00:00:00,1.0\n\
             2020-02-01T01:00:00,Invalid/Calib\n\
             2020-02-01T02:00:00,2.0\n",
        );
        let series = build_series(&table).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].len(), 2);
        assert_eq!(series[0].points[0].1, 1.0);
        assert_eq!(series[0].points[1].1, 2.0);
    }

    #[test]
    fn test_non_numeric_voltage_fails() {
        let table = parse(
            "Time,Voltage\n\
             2020-02-01T00:00:00,1.0\n\
             2020-02-01T01:00:00,garbage\n",
        );
        let err = build_series(&table).unwrap_err();
        assert!(matches!(
            err,
            DataError::Value { row: 2, ref value } if value == "garbage"
        ));
    }

    #[test]
    fn test_grouped_by_fub_id() {
        let table = parse(
            "Time,Voltage,FubId\n\
             2020-02-01T00:00:00,1.0,fub_b\n\
             2020-02-01T01:00:00,2.0,fub_a\n\
             2020-02-01T02:00:00,3.0,fub_b\n",
        );
        let series = build_series(&table).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "fub_a");
        assert_eq!(series[0].len(), 1);
        assert_eq!(series[1].label, "fub_b");
        assert_eq!(series[1].len(), 2);
    }

    #[test]
    fn test_single_series_without_fub_column() {
        let table = parse(
            "Time,Voltage\n\
             2020-02-01T00:00:00,1.0\n\
             2020-02-01T01:00:00,2.0\n",
        );
        let series = build_series(&table).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "Voltage");
        assert_eq!(series[0].len(), 2);
    }

    #[test]
    fn test_generated_csv_roundtrip() {
        // Generate -> serialize -> ingest -> build series must preserve
        // row count, times, and voltages (within float tolerance).
        let config = GeneratorConfig {
            samples: 50,
            voltage_low: 0.0,
            voltage_high: 10.0,
            start_date: NaiveDate::from_ymd_opt(2020, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 2, 2).unwrap(),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let table = generate(&config, &mut rng).unwrap();

        let csv = to_csv(&table).unwrap();
        let uploaded = parse_upload(csv.as_bytes()).unwrap();
        assert_eq!(uploaded.len(), table.len());

        let series = build_series(&uploaded).unwrap();
        let total: usize = series.iter().map(|s| s.len()).sum();
        assert_eq!(total, table.len());

        // Compare per-point against the original rows, matched by order
        // within each fub group.
        for s in &series {
            let originals: Vec<_> = table.rows.iter().filter(|r| r.fub_id == s.label).collect();
            assert_eq!(originals.len(), s.len());
            for (point, original) in s.points.iter().zip(originals) {
                assert_eq!(point.0, original.time);
                assert!((point.1 - original.voltage).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_empty_table_gives_no_series() {
        let table = parse("Time,Voltage\n");
        let series = build_series(&table).unwrap();
        assert!(series.is_empty());
    }
}
