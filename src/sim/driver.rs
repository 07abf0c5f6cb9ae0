//! Seeded random play for exercising the engine end to end.
//!
//! Every surviving member of every faction picks a random active option.
//! Optionally one faction plays the best-move suggestion against a chosen
//! rival instead, casting after everyone else so it sees the full board.

use log::debug;

use crate::bout::BoutStateMachine;
use crate::core::{FactionId, FactionMap, GameRng, OptionId};
use crate::error::StateError;
use crate::strategy::Allocation;

/// Configuration for simulated play.
#[derive(Clone, Debug)]
pub struct PlayConfig {
    /// Seed for voter randomness.
    pub seed: u64,

    /// Stop after this many completed bouts.
    pub max_bouts: u32,

    /// Hard cap on resolved turns (guards against games that cannot end,
    /// e.g. when no faction has members left to vote).
    pub max_turns: u32,

    /// Faction that follows the search, and the rival it targets.
    pub strategist: Option<(FactionId, FactionId)>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_bouts: 1,
            max_turns: 1_000,
            strategist: None,
        }
    }
}

impl PlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_bouts(mut self, bouts: u32) -> Self {
        self.max_bouts = bouts;
        self
    }

    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Let `acting` play the search's suggestion against `target`.
    pub fn with_strategist(mut self, acting: FactionId, target: FactionId) -> Self {
        self.strategist = Some((acting, target));
        self
    }
}

/// Outcome of a simulated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayReport {
    pub bouts_completed: u32,
    pub turns_played: u32,
    pub scores: FactionMap<u32>,
}

/// Drives a `BoutStateMachine` with random voters.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    config: PlayConfig,
    rng: GameRng,
}

impl RandomPlayer {
    pub fn new(config: PlayConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    /// Play until the configured number of bouts completes or the turn cap
    /// is reached.
    pub fn play(&mut self, machine: &mut BoutStateMachine) -> Result<PlayReport, StateError> {
        let mut bouts_completed = 0;
        let mut turns_played = 0;

        while bouts_completed < self.config.max_bouts && turns_played < self.config.max_turns {
            self.play_turn(machine)?;
            machine.resolve_turn();
            let summary = machine.confirm_resolution()?;
            turns_played += 1;
            if summary.is_bout_over {
                bouts_completed += 1;
            }
        }

        debug!(
            "seed {}: simulated {} turns, {} bouts, scores {:?}",
            self.rng.seed(),
            turns_played,
            bouts_completed,
            machine.scores().as_slice()
        );

        Ok(PlayReport {
            bouts_completed,
            turns_played,
            scores: machine.scores().clone(),
        })
    }

    /// Cast every outstanding choice for the current turn.
    pub fn play_turn(&mut self, machine: &mut BoutStateMachine) -> Result<(), StateError> {
        let acting = self.config.strategist.map(|(acting, _)| acting);
        let factions: Vec<FactionId> = machine.populations().faction_ids().collect();

        for faction in factions.into_iter().filter(|&f| Some(f) != acting) {
            for _ in 0..machine.undecided(faction) {
                let option = self.rng.pick_option(machine.option_count());
                machine.cast_choice(faction, option)?;
            }
        }

        if let Some((acting, target)) = self.config.strategist {
            if let Some(best) = machine.suggest(acting, target)? {
                cast_allocation(machine, acting, &best.allocation)?;
            }
        }
        Ok(())
    }
}

/// Cast `allocation` for `faction`, option by option.
pub fn cast_allocation(
    machine: &mut BoutStateMachine,
    faction: FactionId,
    allocation: &Allocation,
) -> Result<(), StateError> {
    for option in OptionId::ALL {
        for _ in 0..allocation.get(option) {
            machine.cast_choice(faction, option)?;
        }
    }
    Ok(())
}
