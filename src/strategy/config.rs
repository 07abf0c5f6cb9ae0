//! Allocation search configuration.

use serde::{Deserialize, Serialize};

/// Default penalty applied to each own member lost.
pub const DEFAULT_SELF_LOSS_WEIGHT: f64 = 1.2;

/// Allocation search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Weight of self-inflicted losses in the score
    /// `target_loss - self_loss_weight * self_loss` (default: 1.2).
    /// Values above 1.0 make losing an own member cost more than
    /// killing a rival member gains.
    pub self_loss_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            self_loss_weight: DEFAULT_SELF_LOSS_WEIGHT,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom self-loss weight.
    #[must_use]
    pub fn with_self_loss_weight(mut self, weight: f64) -> Self {
        self.self_loss_weight = weight;
        self
    }
}
