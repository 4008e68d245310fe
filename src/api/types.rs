//! Request and response types for the generation API

use crate::domain::config::GenerationConfig;
use crate::domain::generator::GeneratorError;
use crate::domain::record::{GeneratedBatch, GenerationId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters collected from the caller for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub quantity: u32,
    pub num_records: u32,
    pub range_start: u32,
    pub range_end: u32,
}

impl GenerateRequest {
    pub fn into_config(self) -> Result<GenerationConfig, GeneratorError> {
        GenerationConfig::from_raw(
            self.start_date,
            self.end_date,
            self.quantity,
            self.num_records,
            self.range_start,
            self.range_end,
        )
    }
}

/// Counts reported back to the caller after a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateSummary {
    pub generation_id: GenerationId,
    pub total_records: usize,
    pub concurrent_records: usize,
    pub denial_records: usize,
}

impl From<&GeneratedBatch> for GenerateSummary {
    fn from(batch: &GeneratedBatch) -> Self {
        Self {
            generation_id: batch.id,
            total_records: batch.total_count(),
            concurrent_records: batch.concurrent_count(),
            denial_records: batch.denial_count(),
        }
    }
}
