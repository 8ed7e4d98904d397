//! In-memory tables for generated and uploaded voltage data
//!
//! Two table types exist because the two panels have different needs:
//! - `SampleTable` holds fully-typed generated rows (voltage already `f64`)
//! - `UploadedTable` keeps voltage cells as raw text until the sentinel
//!   marker has been filtered out, so filtering happens before coercion

use chrono::NaiveDateTime;

/// Marker the source domain uses for a missing/invalid voltage reading.
/// Rows carrying it are dropped before numeric conversion, never coerced.
pub const SENTINEL_VOLTAGE: &str = "Invalid/Calib";

/// Timestamp format written to CSV (ISO-8601-like, second resolution)
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One generated sample
#[derive(Clone, Debug, PartialEq)]
pub struct SampleRow {
    pub time: NaiveDateTime,
    pub voltage: f64,
    pub fub_id: String,
}

/// A generated dataset
///
/// Replaced wholesale on every Generate; no history is retained.
#[derive(Clone, Debug, Default)]
pub struct SampleTable {
    pub rows: Vec<SampleRow>,
}

impl SampleTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One row parsed from an uploaded CSV
///
/// `voltage` stays a string here: the sentinel filter has to see the raw
/// cell before any float coercion is attempted.
#[derive(Clone, Debug)]
pub struct UploadedRow {
    pub time: NaiveDateTime,
    pub voltage: String,
    pub fub_id: Option<String>,
}

/// A dataset parsed from uploaded bytes
///
/// Lives for one load session; the next load replaces it entirely.
#[derive(Clone, Debug, Default)]
pub struct UploadedTable {
    /// Whether the source file carried a FubId column
    pub has_fub_id: bool,
    pub rows: Vec<UploadedRow>,
}

impl UploadedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows carrying the sentinel marker
    pub fn sentinel_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.voltage.trim() == SENTINEL_VOLTAGE)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_sentinel_count() {
        let table = UploadedTable {
            has_fub_id: false,
            rows: vec![
                UploadedRow {
                    time: dt("2020-02-01"),
                    voltage: "1.5".to_string(),
                    fub_id: None,
                },
                UploadedRow {
                    time: dt("2020-02-01"),
                    voltage: "Invalid/Calib".to_string(),
                    fub_id: None,
                },
                UploadedRow {
                    time: dt("2020-02-02"),
                    voltage: " Invalid/Calib ".to_string(),
                    fub_id: None,
                },
            ],
        };

        assert_eq!(table.len(), 3);
        assert_eq!(table.sentinel_count(), 2);
    }
}
