//! Vote counting and the elimination rule.
//!
//! `tally` counts choices per option; `eliminated` applies the turn's rule
//! to a tally. Both are pure and never fail.
//!
//! Ties eliminate every tied option. When every active option has the same
//! nonzero count, every option is eliminated under either rule. A tally with
//! no votes eliminates nothing.

use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::core::{Choice, EliminatedSet, FactionId, OptionCount, OptionId, RuleMode};

/// Per-option vote counts. Always covers all three options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tally {
    counts: [u32; 3],
}

impl Tally {
    /// Tally with the given counts for `A`, `B`, `C`.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { counts: [a, b, c] }
    }

    /// Count only the choices cast by `faction`.
    #[must_use]
    pub fn for_faction(choices: &[Choice], faction: FactionId) -> Self {
        let mut tally = Self::default();
        for choice in choices.iter().filter(|c| c.is_for(faction)) {
            tally[choice.option] += 1;
        }
        tally
    }

    /// Count for a single option.
    #[must_use]
    pub fn get(&self, option: OptionId) -> u32 {
        self.counts[option.index()]
    }

    /// Total votes across the active options.
    #[must_use]
    pub fn total(&self, option_count: OptionCount) -> u32 {
        option_count.active().iter().map(|&o| self.get(o)).sum()
    }

    /// Sum of counts over `options`.
    #[must_use]
    pub fn sum_over(&self, options: &[OptionId]) -> u32 {
        options.iter().map(|&o| self.get(o)).sum()
    }

    /// Componentwise sum of two tallies.
    #[must_use]
    pub fn combined(&self, other: &Tally) -> Tally {
        Tally {
            counts: [
                self.counts[0] + other.counts[0],
                self.counts[1] + other.counts[1],
                self.counts[2] + other.counts[2],
            ],
        }
    }
}

impl Index<OptionId> for Tally {
    type Output = u32;

    fn index(&self, option: OptionId) -> &Self::Output {
        &self.counts[option.index()]
    }
}

impl IndexMut<OptionId> for Tally {
    fn index_mut(&mut self, option: OptionId) -> &mut Self::Output {
        &mut self.counts[option.index()]
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A={} B={} C={}", self.counts[0], self.counts[1], self.counts[2])
    }
}

/// Count choices per option.
///
/// ```
/// use elimination_engine::core::{Choice, ChoiceId, FactionId, OptionId};
/// use elimination_engine::rules::tally;
///
/// let choices = [
///     Choice::new(ChoiceId(0), FactionId::new(0), OptionId::A),
///     Choice::new(ChoiceId(1), FactionId::new(1), OptionId::A),
///     Choice::new(ChoiceId(2), FactionId::new(1), OptionId::B),
/// ];
/// let counts = tally(&choices);
/// assert_eq!(counts[OptionId::A], 2);
/// assert_eq!(counts[OptionId::C], 0);
/// ```
#[must_use]
pub fn tally(choices: &[Choice]) -> Tally {
    let mut counts = Tally::default();
    for choice in choices {
        counts[choice.option] += 1;
    }
    counts
}

/// Options eliminated by `mode`, considering only the active options.
#[must_use]
pub fn eliminated(tally: &Tally, mode: RuleMode, option_count: OptionCount) -> EliminatedSet {
    let active = option_count.active();

    let threshold = match mode {
        RuleMode::MajorityEliminated => {
            let max = active.iter().map(|&o| tally[o]).max().unwrap_or(0);
            // Silence is not a tie: no votes, no elimination.
            if max == 0 {
                return EliminatedSet::new();
            }
            max
        }
        RuleMode::MinorityEliminated => {
            if tally.total(option_count) == 0 {
                return EliminatedSet::new();
            }
            active.iter().map(|&o| tally[o]).min().unwrap_or(0)
        }
    };

    let result: EliminatedSet = active
        .iter()
        .copied()
        .filter(|&o| tally[o] == threshold)
        .collect();

    debug!("tally {} under {}: eliminated {:?}", tally, mode, result.as_slice());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChoiceId;

    fn choice(id: u32, faction: u8, option: OptionId) -> Choice {
        Choice::new(ChoiceId(id), FactionId::new(faction), option)
    }

    #[test]
    fn test_tally_counts_every_option() {
        let choices = vec![
            choice(0, 0, OptionId::A),
            choice(1, 0, OptionId::B),
            choice(2, 1, OptionId::B),
        ];
        let counts = tally(&choices);

        assert_eq!(counts, Tally::new(1, 2, 0));
        assert_eq!(counts.total(OptionCount::Two), 3);
    }

    #[test]
    fn test_tally_empty() {
        assert_eq!(tally(&[]), Tally::default());
    }

    #[test]
    fn test_for_faction() {
        let choices = vec![
            choice(0, 0, OptionId::A),
            choice(1, 1, OptionId::A),
            choice(2, 1, OptionId::C),
        ];

        assert_eq!(Tally::for_faction(&choices, FactionId::new(1)), Tally::new(1, 0, 1));
        assert_eq!(Tally::for_faction(&choices, FactionId::new(3)), Tally::default());
    }

    #[test]
    fn test_majority_single_max() {
        let result = eliminated(&Tally::new(3, 1, 0), RuleMode::MajorityEliminated, OptionCount::Two);
        assert_eq!(result.as_slice(), &[OptionId::A]);
    }

    #[test]
    fn test_majority_tie_eliminates_all_tied() {
        let result = eliminated(&Tally::new(2, 2, 1), RuleMode::MajorityEliminated, OptionCount::Three);
        assert_eq!(result.as_slice(), &[OptionId::A, OptionId::B]);
    }

    #[test]
    fn test_majority_no_votes() {
        let result = eliminated(&Tally::default(), RuleMode::MajorityEliminated, OptionCount::Three);
        assert!(result.is_empty());
    }

    #[test]
    fn test_minority_includes_zero_count_option() {
        let result = eliminated(&Tally::new(2, 0, 1), RuleMode::MinorityEliminated, OptionCount::Three);
        assert_eq!(result.as_slice(), &[OptionId::B]);
    }

    #[test]
    fn test_minority_no_votes() {
        let result = eliminated(&Tally::default(), RuleMode::MinorityEliminated, OptionCount::Two);
        assert!(result.is_empty());
    }

    #[test]
    fn test_inactive_option_ignored() {
        // C has the most votes but is outside a two-option turn.
        let majority = eliminated(&Tally::new(1, 2, 9), RuleMode::MajorityEliminated, OptionCount::Two);
        assert_eq!(majority.as_slice(), &[OptionId::B]);

        let minority = eliminated(&Tally::new(1, 2, 0), RuleMode::MinorityEliminated, OptionCount::Two);
        assert_eq!(minority.as_slice(), &[OptionId::A]);
    }

    #[test]
    fn test_equal_counts_wipe_out_everyone() {
        let counts = Tally::new(4, 4, 4);
        for mode in [RuleMode::MajorityEliminated, RuleMode::MinorityEliminated] {
            let result = eliminated(&counts, mode, OptionCount::Three);
            assert_eq!(result.as_slice(), &[OptionId::A, OptionId::B, OptionId::C]);
        }
    }

    #[test]
    fn test_combined_and_sum_over() {
        let base = Tally::new(3, 1, 0);
        let extra = Tally::new(0, 2, 1);
        let total = base.combined(&extra);

        assert_eq!(total, Tally::new(3, 3, 1));
        assert_eq!(total.sum_over(&[OptionId::A, OptionId::C]), 4);
    }
}
