//! Random sample generation
//!
//! Draws `samples` independent uniform rows: time within the configured date
//! span (second resolution), voltage within the voltage bounds, fub id from
//! the configured subset of `ALLOWED_FUB_IDS`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

use super::error::DataError;
use super::table::{SampleRow, SampleTable};

/// The fixed set of fub ids samples can be tagged with.
/// The generator config selects a subset of these.
pub const ALLOWED_FUB_IDS: &[&str] = &["fub_a", "fub_b", "fub_c", "fub_d", "fub_e", "fub_f"];

/// Upper bound for the sample-count slider
pub const MAX_SAMPLES: usize = 10_000;

/// Bounds for the voltage sliders
pub const VOLTAGE_MIN: f64 = -100.0;
pub const VOLTAGE_MAX: f64 = 100.0;

/// Parameters for the sample data generator
///
/// Sliders and checkboxes in the UI keep these inside their bounds, but
/// `validate()` re-checks them so the generator itself can never be driven
/// out of range (dates arrive from free-text inputs).
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Number of rows to draw
    pub samples: usize,
    /// Inclusive lower voltage bound
    pub voltage_low: f64,
    /// Inclusive upper voltage bound
    pub voltage_high: f64,
    /// First day of the time span
    pub start_date: NaiveDate,
    /// Last day of the time span
    pub end_date: NaiveDate,
    /// Selected fub ids, a subset of `ALLOWED_FUB_IDS`
    pub fub_ids: Vec<String>,
    /// Suggested filename for the save dialog
    pub filename: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            voltage_low: 0.0,
            voltage_high: 10.0,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2020, 12, 31).unwrap_or_default(),
            fub_ids: ALLOWED_FUB_IDS.iter().map(|s| s.to_string()).collect(),
            filename: "sample_data.csv".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Check all bounds before generation
    pub fn validate(&self) -> Result<(), DataError> {
        if self.samples > MAX_SAMPLES {
            return Err(DataError::Config(format!(
                "sample count {} exceeds maximum {}",
                self.samples, MAX_SAMPLES
            )));
        }
        if !self.voltage_low.is_finite() || !self.voltage_high.is_finite() {
            return Err(DataError::Config("voltage bounds must be finite".to_string()));
        }
        if self.voltage_low > self.voltage_high {
            return Err(DataError::Config(format!(
                "voltage low {} is above voltage high {}",
                self.voltage_low, self.voltage_high
            )));
        }
        if self.start_date > self.end_date {
            return Err(DataError::Config(format!(
                "start date {} is after end date {}",
                self.start_date, self.end_date
            )));
        }
        if self.fub_ids.is_empty() {
            return Err(DataError::Config("no fub ids selected".to_string()));
        }
        for id in &self.fub_ids {
            if !ALLOWED_FUB_IDS.contains(&id.as_str()) {
                return Err(DataError::Config(format!("unknown fub id {:?}", id)));
            }
        }
        Ok(())
    }

    /// Start of the time span (midnight of the start date)
    pub fn span_start(&self) -> NaiveDateTime {
        self.start_date.and_time(NaiveTime::MIN)
    }

    /// End of the time span (midnight of the end date)
    pub fn span_end(&self) -> NaiveDateTime {
        self.end_date.and_time(NaiveTime::MIN)
    }
}

/// Draw a fresh random dataset matching the configuration
///
/// `samples == 0` yields an empty table. The caller owns the RNG so tests
/// can pass a seeded one.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<SampleTable, DataError> {
    config.validate()?;

    let start = config.span_start();
    let span_secs = (config.span_end() - start).num_seconds();

    let mut rows = Vec::with_capacity(config.samples);
    for _ in 0..config.samples {
        let offset = rng.random_range(0..=span_secs);
        let time = start + Duration::seconds(offset);
        let voltage = rng.random_range(config.voltage_low..=config.voltage_high);
        let fub_id = config.fub_ids[rng.random_range(0..config.fub_ids.len())].clone();

        rows.push(SampleRow {
            time,
            voltage,
            fub_id,
        });
    }

    log::info!("Generated {} sample rows", rows.len());
    Ok(SampleTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_config() -> GeneratorConfig {
        GeneratorConfig {
            samples: 3,
            voltage_low: 0.0,
            voltage_high: 10.0,
            start_date: NaiveDate::from_ymd_opt(2020, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 2, 2).unwrap(),
            fub_ids: vec!["fub_a".to_string(), "fub_b".to_string()],
            filename: "sample_data.csv".to_string(),
        }
    }

    #[test]
    fn test_generate_respects_bounds() {
        let config = test_config();
        let mut rng = StdRng::seed_from_u64(42);
        let table = generate(&config, &mut rng).unwrap();

        assert_eq!(table.len(), 3);
        for row in &table.rows {
            assert!(row.voltage >= 0.0 && row.voltage <= 10.0);
            assert!(row.time >= config.span_start());
            assert!(row.time <= config.span_end());
            assert!(config.fub_ids.contains(&row.fub_id));
        }
    }

    #[test]
    fn test_generate_large_count() {
        let mut config = test_config();
        config.samples = 1000;
        let mut rng = StdRng::seed_from_u64(7);
        let table = generate(&config, &mut rng).unwrap();

        assert_eq!(table.len(), 1000);
        for row in &table.rows {
            assert!(row.voltage >= config.voltage_low);
            assert!(row.voltage <= config.voltage_high);
            assert!(row.time >= config.span_start());
            assert!(row.time <= config.span_end());
        }
    }

    #[test]
    fn test_zero_samples_gives_empty_table() {
        let mut config = test_config();
        config.samples = 0;
        let mut rng = StdRng::seed_from_u64(1);
        let table = generate(&config, &mut rng).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_single_day_span() {
        // start == end collapses the time span to a single instant
        let mut config = test_config();
        config.end_date = config.start_date;
        let mut rng = StdRng::seed_from_u64(3);
        let table = generate(&config, &mut rng).unwrap();

        for row in &table.rows {
            assert_eq!(row.time, config.span_start());
        }
    }

    #[test]
    fn test_reversed_voltage_bounds_rejected() {
        let mut config = test_config();
        config.voltage_low = 5.0;
        config.voltage_high = 1.0;
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate(&config, &mut rng),
            Err(DataError::Config(_))
        ));
    }

    #[test]
    fn test_reversed_dates_rejected() {
        let mut config = test_config();
        config.start_date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate(&config, &mut rng),
            Err(DataError::Config(_))
        ));
    }

    #[test]
    fn test_empty_fub_selection_rejected() {
        let mut config = test_config();
        config.fub_ids.clear();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate(&config, &mut rng),
            Err(DataError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_fub_id_rejected() {
        let mut config = test_config();
        config.fub_ids.push("not_a_fub".to_string());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate(&config, &mut rng),
            Err(DataError::Config(_))
        ));
    }
}
