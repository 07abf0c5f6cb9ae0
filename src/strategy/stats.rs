//! Allocation search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one allocation search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Compositions scored.
    pub compositions_evaluated: u32,

    /// Times the running best was replaced.
    pub improvements: u32,

    /// Score of the returned allocation, if any.
    pub best_score: Option<f64>,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Compositions scored per second.
    #[must_use]
    pub fn compositions_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.compositions_evaluated as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
