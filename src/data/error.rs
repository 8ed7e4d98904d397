//! Error types for dataset generation, serialization, and ingestion

use thiserror::Error;

/// Errors that can occur while generating, saving, or loading voltage data
///
/// Every failure surfaces as a status-line message in the owning panel;
/// nothing here should ever reach the user as a panic.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes that aren't UTF-8, or a Time value that isn't a timestamp
    #[error("Failed to parse: {0}")]
    Parse(String),

    /// Structurally malformed CSV (ragged rows, bad quoting)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the uploaded file
    #[error("Missing required column: {0}")]
    Schema(String),

    /// A voltage cell that is neither numeric nor the sentinel marker
    #[error("Row {row}: voltage {value:?} is not a number")]
    Value { row: usize, value: String },

    /// Save was requested before any dataset was generated
    #[error("No data has been generated yet")]
    NoData,

    /// Generator parameters violate their bounds
    #[error("Invalid configuration: {0}")]
    Config(String),
}
