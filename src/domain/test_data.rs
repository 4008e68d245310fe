//! Test data builders for consistent testing
//!
//! Centralizes the fixture dates and generation configs used throughout the
//! test suite to ensure consistency and reduce duplication.

use super::config::GenerationConfig;
use chrono::NaiveDate;

/// Fixture dates
pub mod dates {
    use super::*;

    pub fn jan_1() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    pub fn jan_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    pub fn jan_20() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    pub fn jan_31() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }
}

/// Fixture generation configs
pub mod configs {
    use super::*;

    pub const QUANTITY: u32 = 100;
    pub const NUM_RECORDS: u32 = 5;

    /// `quantity=100, num_records=5 -> step=20`, overpeak runs of 1 to 5 days.
    pub fn standard(start: NaiveDate, end: NaiveDate) -> GenerationConfig {
        with_overpeak(start, end, 1, 5)
    }

    /// The standard ramp with an explicit overpeak draw range.
    pub fn with_overpeak(
        start: NaiveDate,
        end: NaiveDate,
        range_start: u32,
        range_end: u32,
    ) -> GenerationConfig {
        GenerationConfig::from_raw(start, end, QUANTITY, NUM_RECORDS, range_start, range_end)
            .expect("fixture config is valid")
    }
}
