//! Domain types and generation logic for Overpeak
//!
//! This module contains the core domain types that represent usage/denial
//! record generation, following type-driven development principles.

pub mod config;
pub mod generator;
pub mod record;
pub mod rng;
pub mod test_data;
pub mod types;

pub use config::{GenerationConfig, OverpeakRange};
pub use generator::{GeneratorError, RecordGenerator};
pub use record::{Category, GeneratedBatch, GenerationId, Record};
pub use rng::{OverpeakSource, RandomSourceError, ScriptedDraws, StdRngSource};
pub use types::{OverpeakBound, Quantity, RecordCount};
