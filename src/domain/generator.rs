//! The increment / denial / decrement phase machine
//!
//! Walks the configured date range one day at a time, emitting exactly one
//! tagged record per day. Concurrent records ramp toward the threshold in
//! fixed steps; when the ramp reaches it, a denial run of random length is
//! entered, tracing a roughly triangular overpeak excursion before the value
//! falls back to the half-threshold floor and the ramp restarts.

use super::config::GenerationConfig;
use super::record::Record;
use super::rng::{OverpeakSource, RandomSourceError};
use thiserror::Error;

/// Errors surfaced by record generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// An input violated its documented constraint; nothing is clamped or
    /// silently fixed.
    #[error("configuration rejected: {constraint}")]
    Configuration { constraint: String },

    /// `num_records` exceeds `quantity`, so the per-day step floors to zero
    /// and the ramp could never reach the threshold.
    #[error("degenerate step: num_records {num_records} exceeds quantity {quantity}")]
    DegenerateStep { quantity: u32, num_records: u32 },

    #[error(transparent)]
    RandomSource(#[from] RandomSourceError),
}

impl GeneratorError {
    pub(crate) fn configuration(constraint: impl Into<String>) -> Self {
        Self::Configuration {
            constraint: constraint.into(),
        }
    }
}

/// Active phase of the day loop, with the loop-local denial state carried
/// in its variant.
#[derive(Debug)]
enum Phase {
    Increment,
    Denial(DenialRun),
    Decrement,
}

/// Counters for one overpeak excursion
#[derive(Debug)]
struct DenialRun {
    remaining: u32,
    original: u32,
    median_reached: bool,
    double_decrement_next: bool,
}

impl DenialRun {
    fn begin(count: u32) -> Self {
        Self {
            remaining: count,
            original: count,
            median_reached: false,
            double_decrement_next: false,
        }
    }

    /// Consume one emitted denial day and return the signed delta the value
    /// trend applies before the next day.
    ///
    /// The trend rises until the median of the run is crossed, then falls.
    /// With `half = original / 2`, an odd-length run crosses when the
    /// remaining count reaches `half`; an even-length run crosses when it
    /// reaches `half - 1`, and the day after the crossing falls by a double
    /// step exactly once to correct for the extra element.
    fn advance(&mut self, step: i64) -> i64 {
        self.remaining -= 1;
        if !self.median_reached {
            let half = self.original / 2;
            if self.original % 2 == 0 {
                if self.remaining == half - 1 {
                    self.median_reached = true;
                    self.double_decrement_next = true;
                }
            } else if self.remaining == half {
                self.median_reached = true;
            }
        }

        if !self.median_reached {
            step
        } else if self.double_decrement_next {
            self.double_decrement_next = false;
            -2 * step
        } else {
            -step
        }
    }

    fn finished(&self) -> bool {
        self.remaining == 0
    }
}

/// The record-generation state machine
///
/// Owns its overpeak source so a run is deterministic given a fixed draw
/// stream. Entropy is consumed once per denial-phase entry; a fresh run
/// length is drawn at every entry.
pub struct RecordGenerator<S> {
    source: S,
}

impl<S: OverpeakSource> RecordGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Produce one record per calendar day of the inclusive date range.
    ///
    /// Completes fully or fails with no output. The emitted record for a
    /// transition day belongs to the phase that was active at the start of
    /// that day's evaluation.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<Vec<Record>, GeneratorError> {
        let quantity = i64::from(config.quantity());
        let step = i64::from(config.step());
        if step == 0 {
            return Err(GeneratorError::DegenerateStep {
                quantity: config.quantity(),
                num_records: config.num_records(),
            });
        }

        let mut records = Vec::with_capacity(config.total_days() as usize);
        let mut date = config.start_date();
        let mut value = step;
        let mut phase = Phase::Increment;

        while date <= config.end_date() {
            phase = match phase {
                Phase::Increment => {
                    records.push(Record::concurrent(date, value));
                    if value >= quantity {
                        Phase::Denial(self.enter_denial(config)?)
                    } else {
                        value += step;
                        Phase::Increment
                    }
                }
                Phase::Denial(mut run) => {
                    records.push(Record::denial(date, value));
                    value += run.advance(step);
                    if run.finished() {
                        Phase::Decrement
                    } else {
                        Phase::Denial(run)
                    }
                }
                Phase::Decrement => {
                    records.push(Record::concurrent(date, value));
                    // Half-threshold floor, compared with real division
                    if value * 2 <= quantity {
                        value = step;
                        Phase::Increment
                    } else {
                        value -= step;
                        Phase::Decrement
                    }
                }
            };

            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }

        Ok(records)
    }

    fn enter_denial(&mut self, config: &GenerationConfig) -> Result<DenialRun, GeneratorError> {
        let bounds = config.overpeak().bounds();
        let count = self.source.draw(bounds.clone())?;
        if !bounds.contains(&count) {
            return Err(RandomSourceError::new(format!(
                "overpeak draw {count} outside [{}, {}]",
                bounds.start(),
                bounds.end()
            ))
            .into());
        }
        Ok(DenialRun::begin(count))
    }
}
