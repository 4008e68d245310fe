//! Most-recent-result slot
//!
//! A generation request writes the slot; download and series reads serve it
//! until the next generation replaces it. Generation is single-shot per user
//! trigger, so a single read-write lock is all the discipline needed.

use crate::domain::record::GeneratedBatch;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct LatestResult {
    slot: Arc<RwLock<Option<Arc<GeneratedBatch>>>>,
}

impl LatestResult {
    pub fn store(&self, batch: GeneratedBatch) {
        *self.slot.write() = Some(Arc::new(batch));
    }

    pub fn load(&self) -> Option<Arc<GeneratedBatch>> {
        self.slot.read().clone()
    }
}
