//! Population lifecycle across turns, rounds and bout resets.
//!
//! ## States
//!
//! ```text
//! AwaitingChoices(turn) --resolve_turn--> Resolving
//! Resolving --confirm_resolution--> AwaitingChoices(next turn)    (bout continues)
//! Resolving --confirm_resolution--> AwaitingChoices(next round)   (bout complete)
//! Resolving --cancel_resolution--> AwaitingChoices(same turn)
//! ```
//!
//! There is no terminal state; play goes on until the caller stops.
//!
//! The machine exclusively owns populations and scores. Front-ends issue
//! commands and read immutable snapshots.

use im::Vector;
use log::{debug, info};

use crate::core::{
    Choice, ChoiceId, FactionId, FactionMap, GameConfig, OptionCount, OptionId, RuleMode,
};
use crate::error::{ConfigError, StateError};
use crate::rules::{eliminated, tally};
use crate::strategy::{Allocation, AllocationSearch, ScenarioContext, ScenarioResult, SearchConfig};

use super::record::{FactionPopulation, TurnRecord};
use super::summary::{BoutSummary, GameSnapshot};

/// Owned game state plus the rules that move it forward.
#[derive(Clone, Debug)]
pub struct BoutStateMachine {
    config: GameConfig,
    mode: RuleMode,
    option_count: OptionCount,
    terminal_threshold: u32,

    populations: FactionMap<FactionPopulation>,
    scores: FactionMap<u32>,

    /// Resolved turns, oldest first.
    history: Vector<TurnRecord>,
    current: TurnRecord,
    pending: Option<BoutSummary>,

    next_choice_id: u32,
    search: AllocationSearch,
}

impl BoutStateMachine {
    /// Create a machine from a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let populations = config.initial_populations().map(|_, &p| FactionPopulation::full(p));
        let scores = FactionMap::with_value(config.faction_count(), 0);

        Ok(Self {
            mode: config.mode,
            option_count: config.option_count,
            terminal_threshold: config.terminal_threshold,
            populations,
            scores,
            history: Vector::new(),
            current: TurnRecord::new(1, 1),
            pending: None,
            next_choice_id: 0,
            search: AllocationSearch::default(),
            config,
        })
    }

    /// Use a custom scoring configuration for suggestions.
    #[must_use]
    pub fn with_search_config(mut self, config: SearchConfig) -> Self {
        self.search = AllocationSearch::new(config);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn faction_count(&self) -> usize {
        self.populations.faction_count()
    }

    #[must_use]
    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    #[must_use]
    pub fn option_count(&self) -> OptionCount {
        self.option_count
    }

    #[must_use]
    pub fn terminal_threshold(&self) -> u32 {
        self.terminal_threshold
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.current.round_number
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.current.turn_number
    }

    #[must_use]
    pub fn populations(&self) -> &FactionMap<FactionPopulation> {
        &self.populations
    }

    /// Survivors of `faction` in the current bout. Unknown factions have none.
    #[must_use]
    pub fn active(&self, faction: FactionId) -> u32 {
        self.populations.get(faction).map_or(0, |p| p.active)
    }

    /// Capacity of `faction`. Unknown factions have none.
    #[must_use]
    pub fn total(&self, faction: FactionId) -> u32 {
        self.populations.get(faction).map_or(0, |p| p.total)
    }

    /// Active populations of every faction.
    #[must_use]
    pub fn active_populations(&self) -> FactionMap<u32> {
        self.populations.map(|_, p| p.active)
    }

    #[must_use]
    pub fn scores(&self) -> &FactionMap<u32> {
        &self.scores
    }

    /// Choices cast so far in the current turn.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.current.choices
    }

    #[must_use]
    pub fn current_turn(&self) -> &TurnRecord {
        &self.current
    }

    /// Resolved turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Summary awaiting confirmation, if a turn is being resolved.
    #[must_use]
    pub fn pending(&self) -> Option<&BoutSummary> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.pending.is_some()
    }

    /// Surviving members of `faction` that have not chosen yet this turn.
    #[must_use]
    pub fn undecided(&self, faction: FactionId) -> u32 {
        self.active(faction).saturating_sub(self.current.cast_by(faction))
    }

    // === Choices ===

    /// Record a choice for one surviving member of `faction`.
    pub fn cast_choice(&mut self, faction: FactionId, option: OptionId) -> Result<ChoiceId, StateError> {
        self.ensure_not_resolving()?;
        self.ensure_faction(faction)?;
        if !self.option_count.contains(option) {
            return Err(StateError::InactiveOption(option));
        }
        if self.undecided(faction) == 0 {
            return Err(StateError::FactionSaturated {
                faction,
                active: self.active(faction),
            });
        }

        let id = ChoiceId(self.next_choice_id);
        self.next_choice_id += 1;
        self.current.choices.push(Choice::new(id, faction, option));
        Ok(id)
    }

    /// Withdraw a previously cast choice.
    pub fn remove_choice(&mut self, id: ChoiceId) -> Result<Choice, StateError> {
        self.ensure_not_resolving()?;
        let pos = self
            .current
            .choices
            .iter()
            .position(|c| c.id == id)
            .ok_or(StateError::UnknownChoice(id))?;
        Ok(self.current.choices.remove(pos))
    }

    // === Resolution ===

    /// Work out the consequences of the current turn without committing them.
    ///
    /// Calling this again while resolving recomputes the same summary.
    pub fn resolve_turn(&mut self) -> BoutSummary {
        let counts = tally(&self.current.choices);
        let eliminated = eliminated(&counts, self.mode, self.option_count);

        let mut deaths = FactionMap::with_value(self.faction_count(), 0u32);
        for choice in self.current.choices.iter().filter(|c| eliminated.contains(&c.option)) {
            deaths[choice.faction] += 1;
        }

        let survivors = self
            .populations
            .map(|id, p| p.active.saturating_sub(deaths[id]));
        let survivors_total = survivors.sum();
        let is_bout_over = survivors_total <= self.terminal_threshold;
        let winners = if is_bout_over {
            survivors
                .iter()
                .filter(|(_, n)| **n > 0)
                .map(|(id, _)| id)
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            "round {} turn {}: eliminated {:?}, {} dead, {} left",
            self.current.round_number,
            self.current.turn_number,
            eliminated.as_slice(),
            deaths.sum(),
            survivors_total
        );

        let summary = BoutSummary {
            eliminated,
            deaths,
            survivors,
            survivors_total,
            is_bout_over,
            winners,
        };
        self.pending = Some(summary.clone());
        summary
    }

    /// Commit the pending resolution and advance to the next turn or round.
    pub fn confirm_resolution(&mut self) -> Result<BoutSummary, StateError> {
        let summary = self.pending.take().ok_or(StateError::NoPendingResolution)?;

        let round = self.current.round_number;
        let turn = self.current.turn_number;

        let mut finished = std::mem::replace(&mut self.current, TurnRecord::new(round, turn));
        finished.is_completed = true;
        finished.snapshot = Some(summary.survivors.clone());
        self.history.push_back(finished);

        if summary.is_bout_over {
            for (id, score) in self.scores.iter_mut() {
                *score += summary.survivors[id];
            }
            for (_, pop) in self.populations.iter_mut() {
                pop.restore();
            }
            self.current = TurnRecord::new(round + 1, 1);
            info!(
                "round {} complete after {} turns, winners {:?}, scores {:?}",
                round,
                turn,
                summary.winners,
                self.scores.as_slice()
            );
        } else {
            for (id, pop) in self.populations.iter_mut() {
                pop.active = summary.survivors[id];
            }
            self.current = TurnRecord::new(round, turn + 1);
        }

        Ok(summary)
    }

    /// Drop the pending resolution and keep collecting choices.
    pub fn cancel_resolution(&mut self) -> Result<(), StateError> {
        self.pending
            .take()
            .map(|_| ())
            .ok_or(StateError::NoPendingResolution)
    }

    // === Configuration ===

    /// Change the capacity of `faction`.
    ///
    /// On the first turn of a round the active population follows the new
    /// capacity immediately; mid-bout only future bouts are affected.
    pub fn edit_capacity(&mut self, faction: FactionId, new_total: i64) -> Result<(), StateError> {
        self.ensure_not_resolving()?;
        self.ensure_faction(faction)?;
        if new_total < 0 {
            return Err(ConfigError::NegativePopulation { faction, value: new_total }.into());
        }
        let new_total = u32::try_from(new_total)
            .map_err(|_| ConfigError::PopulationOverflow { faction, value: new_total })?;

        let opens_round = self.current.opens_round();
        let pop = &mut self.populations[faction];
        pop.total = new_total;
        if opens_round {
            pop.active = new_total;
        } else {
            pop.active = pop.active.min(new_total);
        }
        Ok(())
    }

    pub fn set_mode(&mut self, mode: RuleMode) -> Result<(), StateError> {
        self.ensure_not_resolving()?;
        self.mode = mode;
        Ok(())
    }

    /// Change the option set size. Dropping to two options is refused while
    /// choices for `C` are on the board.
    pub fn set_option_count(&mut self, option_count: OptionCount) -> Result<(), StateError> {
        self.ensure_not_resolving()?;
        let stranded = self
            .current
            .choices
            .iter()
            .filter(|c| !option_count.contains(c.option))
            .count() as u32;
        if stranded > 0 {
            return Err(StateError::OptionInUse { count: stranded });
        }
        self.option_count = option_count;
        Ok(())
    }

    pub fn set_terminal_threshold(&mut self, threshold: u32) -> Result<(), StateError> {
        self.ensure_not_resolving()?;
        self.terminal_threshold = threshold;
        Ok(())
    }

    /// Start over: initial populations, zero scores, round 1 turn 1.
    ///
    /// Rule mode and option count stay as currently set.
    pub fn reset(&mut self) {
        self.populations = self
            .config
            .initial_populations()
            .map(|_, &p| FactionPopulation::full(p));
        self.scores = FactionMap::with_value(self.config.faction_count(), 0);
        self.history = Vector::new();
        self.current = TurnRecord::new(1, 1);
        self.pending = None;
        self.next_choice_id = 0;
        info!("game reset");
    }

    // === Strategy ===

    /// Best allocation of `remaining` undecided members of `self_faction`
    /// against `target_faction` on the current board.
    ///
    /// `Ok(None)` when `remaining` is negative.
    pub fn best_move(
        &mut self,
        self_faction: FactionId,
        target_faction: FactionId,
        remaining: i64,
    ) -> Result<Option<ScenarioResult>, StateError> {
        self.ensure_faction(self_faction)?;
        self.ensure_faction(target_faction)?;
        let (mode, option_count) = (self.mode, self.option_count);
        Ok(self.search.best_move(
            &self.current.choices,
            self_faction,
            target_faction,
            remaining,
            mode,
            option_count,
        ))
    }

    /// Best move for all of `self_faction`'s currently undecided members.
    pub fn suggest(
        &mut self,
        self_faction: FactionId,
        target_faction: FactionId,
    ) -> Result<Option<ScenarioResult>, StateError> {
        let remaining = i64::from(self.undecided(self_faction));
        self.best_move(self_faction, target_faction, remaining)
    }

    /// Project an arbitrary allocation on the current board.
    #[must_use]
    pub fn evaluate(
        &self,
        self_faction: FactionId,
        target_faction: FactionId,
        allocation: &Allocation,
    ) -> ScenarioResult {
        ScenarioContext::from_choices(&self.current.choices, self_faction, target_faction)
            .evaluate(allocation, self.mode, self.option_count)
    }

    /// Search configuration and statistics of the last suggestion.
    #[must_use]
    pub fn search(&self) -> &AllocationSearch {
        &self.search
    }

    // === Views ===

    /// Immutable view for front-ends.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            faction_names: self.config.factions.iter().map(|f| f.name.clone()).collect(),
            populations: self.populations.clone(),
            scores: self.scores.clone(),
            round_number: self.current.round_number,
            turn_number: self.current.turn_number,
            mode: self.mode,
            option_count: self.option_count,
            terminal_threshold: self.terminal_threshold,
            choices: self.current.choices.clone(),
            tally: tally(&self.current.choices),
            resolving: self.is_resolving(),
        }
    }

    fn ensure_not_resolving(&self) -> Result<(), StateError> {
        if self.pending.is_some() {
            Err(StateError::ResolutionPending)
        } else {
            Ok(())
        }
    }

    fn ensure_faction(&self, faction: FactionId) -> Result<(), ConfigError> {
        if self.populations.contains(faction) {
            Ok(())
        } else {
            Err(ConfigError::UnknownFaction(faction))
        }
    }
}
