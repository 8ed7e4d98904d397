//! CSV serialization and ingestion
//!
//! The generator writes `Time,Voltage,FubId` with ISO-8601-like timestamps;
//! the viewer accepts any comma-delimited file that carries at least a Time
//! and a Voltage column, in any column order, with FubId optional.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::error::DataError;
use super::table::{SampleTable, UploadedRow, UploadedTable, TIME_FORMAT};

/// Column headers written by the generator, in fixed order
const HEADERS: [&str; 3] = ["Time", "Voltage", "FubId"];

/// Timestamp formats accepted on ingestion.
/// The generator's own format comes first; the rest are common variants.
const ACCEPTED_TIME_FORMATS: &[&str] = &[
    TIME_FORMAT,
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Serialize a generated dataset to CSV text
///
/// An empty table serializes to a header-only file. Voltages are written
/// with `f64`'s shortest round-trippable representation.
pub fn to_csv(table: &SampleTable) -> Result<String, DataError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for row in &table.rows {
        writer.write_record([
            row.time.format(TIME_FORMAT).to_string(),
            row.voltage.to_string(),
            row.fub_id.clone(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DataError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| DataError::Parse(e.to_string()))
}

/// Parse uploaded bytes into a table
///
/// Fails with `Parse` on non-UTF-8 input or an unparseable Time value,
/// `Csv` on malformed rows, and `Schema` when Time or Voltage is missing.
pub fn parse_upload(bytes: &[u8]) -> Result<UploadedTable, DataError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| DataError::Parse(format!("file is not UTF-8 text ({})", e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let time_idx = headers
        .iter()
        .position(|h| h == "Time")
        .ok_or_else(|| DataError::Schema("Time".to_string()))?;
    let voltage_idx = headers
        .iter()
        .position(|h| h == "Voltage")
        .ok_or_else(|| DataError::Schema("Voltage".to_string()))?;
    let fub_idx = headers.iter().position(|h| h == "FubId");

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row_number = i + 1;

        let time = parse_time(record.get(time_idx).unwrap_or(""), row_number)?;
        let voltage = record.get(voltage_idx).unwrap_or("").to_string();
        let fub_id = fub_idx.and_then(|idx| record.get(idx)).map(str::to_string);

        rows.push(UploadedRow {
            time,
            voltage,
            fub_id,
        });
    }

    Ok(UploadedTable {
        has_fub_id: fub_idx.is_some(),
        rows,
    })
}

/// Parse one Time cell, trying each accepted format in turn.
/// A bare date (`YYYY-MM-DD`) is taken as midnight.
fn parse_time(value: &str, row_number: usize) -> Result<NaiveDateTime, DataError> {
    let value = value.trim();

    for format in ACCEPTED_TIME_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(time);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(DataError::Parse(format!(
        "row {}: {:?} is not a timestamp",
        row_number, value
    )))
}
