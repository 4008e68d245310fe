//! Generated record model

use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one generation run
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRef
))]
pub struct GenerationId(Uuid);

impl GenerationId {
    pub fn generate() -> Self {
        // Uuid::now_v7() generates a time-ordered UUID
        Self::new(Uuid::now_v7())
    }
}

impl Default for GenerationId {
    fn default() -> Self {
        Self::generate()
    }
}

/// Downstream bucket a record is consumed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[display("concurrent")]
    Concurrent,
    #[display("denial")]
    Denial,
}

/// One tagged record, exactly one per calendar day of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub value: i64,
    pub category: Category,
}

impl Record {
    pub fn concurrent(date: NaiveDate, value: i64) -> Self {
        Self {
            date,
            value,
            category: Category::Concurrent,
        }
    }

    pub fn denial(date: NaiveDate, value: i64) -> Self {
        Self {
            date,
            value,
            category: Category::Denial,
        }
    }
}

/// A completed generation run, held as the latest result until the next one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedBatch {
    pub id: GenerationId,
    pub generated_at: DateTime<Utc>,
    pub records: Vec<Record>,
}

impl GeneratedBatch {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            id: GenerationId::generate(),
            generated_at: Utc::now(),
            records,
        }
    }

    pub fn concurrent(&self) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(|r| r.category == Category::Concurrent)
    }

    pub fn denial(&self) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(|r| r.category == Category::Denial)
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn concurrent_count(&self) -> usize {
        self.concurrent().count()
    }

    pub fn denial_count(&self) -> usize {
        self.denial().count()
    }
}
