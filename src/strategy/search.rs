//! Exhaustive best-move search over allocations.
//!
//! Every way of splitting `remaining` undecided members across the active
//! options is scored with `target_loss - w * self_loss`. The search space is
//! tiny (a faction rarely has more than ten undecided members), so nothing
//! is pruned.
//!
//! Enumeration order is fixed: `a` ascending, then `b` ascending, with the
//! last option taking the rest. The first composition reaching the best
//! score wins, so identical inputs always give the identical answer.

use std::time::Instant;

use log::debug;

use crate::core::{Choice, FactionId, OptionCount, RuleMode};

use super::config::SearchConfig;
use super::scenario::{Allocation, ScenarioContext, ScenarioResult};
use super::stats::SearchStats;

/// Number of compositions of `remaining` over the active options.
#[must_use]
pub fn composition_count(remaining: u32, option_count: OptionCount) -> usize {
    let r = remaining as usize;
    match option_count {
        OptionCount::Two => r + 1,
        OptionCount::Three => (r + 1) * (r + 2) / 2,
    }
}

/// All non-negative compositions of `remaining`, in search order.
///
/// ```
/// use elimination_engine::core::OptionCount;
/// use elimination_engine::strategy::{compositions, Allocation};
///
/// let all = compositions(2, OptionCount::Two);
/// assert_eq!(all, vec![Allocation::new(0, 2, 0), Allocation::new(1, 1, 0), Allocation::new(2, 0, 0)]);
/// ```
#[must_use]
pub fn compositions(remaining: u32, option_count: OptionCount) -> Vec<Allocation> {
    let mut out = Vec::with_capacity(composition_count(remaining, option_count));
    match option_count {
        OptionCount::Two => {
            for a in 0..=remaining {
                out.push(Allocation::new(a, remaining - a, 0));
            }
        }
        OptionCount::Three => {
            for a in 0..=remaining {
                for b in 0..=remaining - a {
                    out.push(Allocation::new(a, b, remaining - a - b));
                }
            }
        }
    }
    out
}

/// Allocation search context.
///
/// Owns the scoring configuration and the statistics of the last search.
#[derive(Clone, Debug, Default)]
pub struct AllocationSearch {
    config: SearchConfig,
    stats: SearchStats,
}

impl AllocationSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the best allocation of `remaining` members for `self_faction`
    /// against `target_faction`, given the choices already cast.
    ///
    /// Returns `None` only when `remaining` is negative.
    pub fn best_move(
        &mut self,
        choices: &[Choice],
        self_faction: FactionId,
        target_faction: FactionId,
        remaining: i64,
        mode: RuleMode,
        option_count: OptionCount,
    ) -> Option<ScenarioResult> {
        let remaining = u32::try_from(remaining).ok()?;
        let ctx = ScenarioContext::from_choices(choices, self_faction, target_faction);
        self.search(&ctx, remaining, mode, option_count)
    }

    /// Search over a precomputed board.
    pub fn search(
        &mut self,
        ctx: &ScenarioContext,
        remaining: u32,
        mode: RuleMode,
        option_count: OptionCount,
    ) -> Option<ScenarioResult> {
        let start = Instant::now();
        self.stats.reset();

        let weight = self.config.self_loss_weight;
        let mut best: Option<(f64, ScenarioResult)> = None;

        for allocation in compositions(remaining, option_count) {
            let result = ctx.evaluate(&allocation, mode, option_count);
            let score = result.score(weight);
            self.stats.compositions_evaluated += 1;

            let improves = match &best {
                Some((best_score, _)) => score > *best_score,
                None => true,
            };
            if improves {
                self.stats.improvements += 1;
                best = Some((score, result));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.stats.best_score = best.as_ref().map(|(score, _)| *score);

        if let Some((score, result)) = &best {
            debug!(
                "best allocation {} scores {:.1} (target -{}, self -{}) over {} compositions ({:.0}/s)",
                result.allocation, score, result.target_loss, result.self_loss,
                self.stats.compositions_evaluated,
                self.stats.compositions_per_second()
            );
        }

        best.map(|(_, result)| result)
    }
}

/// Find the best allocation with the default scoring weight.
///
/// See [`AllocationSearch::best_move`].
#[must_use]
pub fn best_move(
    choices: &[Choice],
    self_faction: FactionId,
    target_faction: FactionId,
    remaining: i64,
    mode: RuleMode,
    option_count: OptionCount,
) -> Option<ScenarioResult> {
    AllocationSearch::default().best_move(
        choices,
        self_faction,
        target_faction,
        remaining,
        mode,
        option_count,
    )
}
