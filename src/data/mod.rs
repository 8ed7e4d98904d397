//! Data module - datasets, random generation, CSV I/O, plot series
//!
//! This module provides:
//! - `SampleTable` / `UploadedTable` in-memory tables
//! - `GeneratorConfig` and uniform random sample generation
//! - CSV serialization and ingestion with schema validation
//! - Sentinel filtering and grouping into plot series

mod csv_io;
mod error;
mod generate;
mod series;
mod table;

pub use csv_io::{parse_upload, to_csv};
pub use error::DataError;
pub use generate::{generate, GeneratorConfig, ALLOWED_FUB_IDS, MAX_SAMPLES, VOLTAGE_MAX, VOLTAGE_MIN};
pub use series::{build_series, VoltageSeries};
pub use table::{SampleRow, SampleTable, UploadedRow, UploadedTable, SENTINEL_VOLTAGE, TIME_FORMAT};
