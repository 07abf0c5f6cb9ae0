//! What-if projection of a single allocation.
//!
//! Given the votes already on the board, `evaluate` answers: if the acting
//! faction commits its undecided members as `allocation`, which options die
//! and how many members do the rival and the acting faction lose?
//!
//! Only votes already cast by the rival count towards `target_loss`; the
//! rival's future votes are unknown. The acting faction's own allocation
//! does count towards `self_loss` when it lands on an eliminated option.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, EliminatedSet, FactionId, OptionCount, OptionId, RuleMode};
use crate::rules::{eliminated, tally, Tally};

/// Proposed split of a faction's undecided members across the options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Allocation {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Allocation {
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// Members committed in total.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.a + self.b + self.c
    }

    /// Members committed to `option`.
    #[must_use]
    pub const fn get(&self, option: OptionId) -> u32 {
        match option {
            OptionId::A => self.a,
            OptionId::B => self.b,
            OptionId::C => self.c,
        }
    }

    /// The allocation viewed as additional votes.
    #[must_use]
    pub const fn as_tally(&self) -> Tally {
        Tally::new(self.a, self.b, self.c)
    }
}

impl std::fmt::Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{a: {}, b: {}, c: {}}}", self.a, self.b, self.c)
    }
}

/// Projected consequence of one allocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// The allocation that was evaluated.
    pub allocation: Allocation,

    /// Rival members lost (already-cast votes on eliminated options).
    pub target_loss: u32,

    /// Own members lost, including the allocation's own casualties.
    pub self_loss: u32,

    /// Options eliminated by the projected final tally.
    pub eliminated: EliminatedSet,
}

impl ScenarioResult {
    /// Score under `target_loss - self_loss_weight * self_loss`.
    #[must_use]
    pub fn score(&self, self_loss_weight: f64) -> f64 {
        f64::from(self.target_loss) - self_loss_weight * f64::from(self.self_loss)
    }
}

/// Project the result of committing `allocation` on top of `base`.
///
/// The allocation sum is not checked against the faction's undecided count;
/// callers that care do so before calling.
#[must_use]
pub fn evaluate(
    allocation: &Allocation,
    base: &Tally,
    target_breakdown: &Tally,
    self_breakdown: &Tally,
    mode: RuleMode,
    option_count: OptionCount,
) -> ScenarioResult {
    let projected = base.combined(&allocation.as_tally());
    let eliminated = eliminated(&projected, mode, option_count);

    let target_loss = target_breakdown.sum_over(&eliminated);
    let self_loss = self_breakdown.sum_over(&eliminated)
        + eliminated.iter().map(|&o| allocation.get(o)).sum::<u32>();

    ScenarioResult {
        allocation: *allocation,
        target_loss,
        self_loss,
        eliminated,
    }
}

/// Board tallies seen from one acting faction against one rival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenarioContext {
    /// All votes cast this turn.
    pub base: Tally,

    /// Votes cast by the rival faction.
    pub target: Tally,

    /// Votes cast by the acting faction.
    pub own: Tally,
}

impl ScenarioContext {
    /// Split the current turn's choices into board, rival and own tallies.
    #[must_use]
    pub fn from_choices(choices: &[Choice], self_faction: FactionId, target_faction: FactionId) -> Self {
        Self {
            base: tally(choices),
            target: Tally::for_faction(choices, target_faction),
            own: Tally::for_faction(choices, self_faction),
        }
    }

    /// Evaluate `allocation` against this board.
    #[must_use]
    pub fn evaluate(&self, allocation: &Allocation, mode: RuleMode, option_count: OptionCount) -> ScenarioResult {
        evaluate(allocation, &self.base, &self.target, &self.own, mode, option_count)
    }
}
