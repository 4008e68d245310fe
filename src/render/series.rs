//! Plot-series projection
//!
//! Splits a generated batch into the two series a plotting consumer renders
//! against the date axis: concurrent records as a line series, denial
//! records as a bar series.

use crate::domain::record::{Category, GeneratedBatch};
use chrono::NaiveDate;
use serde::Serialize;

/// One plotted point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: i64,
}

/// The two date-keyed series of a generated batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RecordSeries {
    pub concurrent: Vec<SeriesPoint>,
    pub denial: Vec<SeriesPoint>,
}

impl RecordSeries {
    pub fn from_batch(batch: &GeneratedBatch) -> Self {
        let mut series = Self::default();
        for record in &batch.records {
            let point = SeriesPoint {
                date: record.date,
                value: record.value,
            };
            match record.category {
                Category::Concurrent => series.concurrent.push(point),
                Category::Denial => series.denial.push(point),
            }
        }
        series
    }
}
