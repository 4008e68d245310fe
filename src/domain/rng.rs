//! Randomness seam for overpeak draws
//!
//! The generator consumes entropy once per denial-phase entry. Keeping the
//! source behind a trait lets tests script every draw and exercise each
//! phase-transition edge deterministically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Failure of the injected random source, propagated verbatim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("random source failure: {reason}")]
pub struct RandomSourceError {
    reason: String,
}

impl RandomSourceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Supplies the overpeak count drawn at each denial-phase entry
pub trait OverpeakSource {
    /// Draw a count uniformly from the inclusive range.
    fn draw(&mut self, bounds: RangeInclusive<u32>) -> Result<u32, RandomSourceError>;
}

/// Production source backed by a seedable PRNG
pub struct StdRngSource(StdRng);

impl StdRngSource {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl OverpeakSource for StdRngSource {
    fn draw(&mut self, bounds: RangeInclusive<u32>) -> Result<u32, RandomSourceError> {
        Ok(self.0.gen_range(bounds))
    }
}

/// Scripted source that replays a fixed sequence of draws
///
/// Running out of scripted values is reported as a source failure, which is
/// also how exhaustion of a real entropy stream would surface.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws(VecDeque<u32>);

impl ScriptedDraws {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self(draws.into_iter().collect())
    }
}

impl OverpeakSource for ScriptedDraws {
    fn draw(&mut self, _bounds: RangeInclusive<u32>) -> Result<u32, RandomSourceError> {
        self.0
            .pop_front()
            .ok_or_else(|| RandomSourceError::new("scripted draws exhausted"))
    }
}
