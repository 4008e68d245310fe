//! Immutable inputs for one generation run

use super::generator::GeneratorError;
use super::types::{OverpeakBound, Quantity, RecordCount};
use chrono::NaiveDate;
use std::ops::RangeInclusive;

/// Inclusive range an overpeak run length is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverpeakRange {
    start: OverpeakBound,
    end: OverpeakBound,
}

impl OverpeakRange {
    pub fn new(start: OverpeakBound, end: OverpeakBound) -> Result<Self, GeneratorError> {
        if end < start {
            return Err(GeneratorError::configuration(
                "range_end must not be less than range_start",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start.into_inner()
    }

    pub fn end(&self) -> u32 {
        self.end.into_inner()
    }

    pub fn bounds(&self) -> RangeInclusive<u32> {
        self.start()..=self.end()
    }
}

/// Immutable parameters for a single generation run
///
/// Constructed once per user-triggered generation event. Cross-field
/// constraints are enforced here; the scalar positivity constraints live in
/// the newtypes themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    start_date: NaiveDate,
    end_date: NaiveDate,
    quantity: Quantity,
    num_records: RecordCount,
    overpeak: OverpeakRange,
}

impl GenerationConfig {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        quantity: Quantity,
        num_records: RecordCount,
        overpeak: OverpeakRange,
    ) -> Result<Self, GeneratorError> {
        if end_date < start_date {
            return Err(GeneratorError::configuration(
                "end_date must not precede start_date",
            ));
        }
        Ok(Self {
            start_date,
            end_date,
            quantity,
            num_records,
            overpeak,
        })
    }

    /// Build a config from unvalidated scalars, naming the first violated
    /// constraint.
    pub fn from_raw(
        start_date: NaiveDate,
        end_date: NaiveDate,
        quantity: u32,
        num_records: u32,
        range_start: u32,
        range_end: u32,
    ) -> Result<Self, GeneratorError> {
        let quantity = Quantity::try_new(quantity)
            .map_err(|_| GeneratorError::configuration("quantity must be a positive integer"))?;
        let num_records = RecordCount::try_new(num_records)
            .map_err(|_| GeneratorError::configuration("num_records must be a positive integer"))?;
        let range_start = OverpeakBound::try_new(range_start)
            .map_err(|_| GeneratorError::configuration("range_start must be a positive integer"))?;
        let range_end = OverpeakBound::try_new(range_end)
            .map_err(|_| GeneratorError::configuration("range_end must be a positive integer"))?;
        let overpeak = OverpeakRange::new(range_start, range_end)?;
        Self::new(start_date, end_date, quantity, num_records, overpeak)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.into_inner()
    }

    pub fn num_records(&self) -> u32 {
        self.num_records.into_inner()
    }

    pub fn overpeak(&self) -> &OverpeakRange {
        &self.overpeak
    }

    /// Per-day ramp magnitude: `quantity` floor-divided by `num_records`.
    ///
    /// Zero when `num_records > quantity`; the generator rejects that case
    /// before entering its day loop.
    pub fn step(&self) -> u32 {
        self.quantity() / self.num_records()
    }

    /// Number of calendar days in the inclusive date range.
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
