//! Outcome of resolving a turn, and read-only views of the game.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, EliminatedSet, FactionId, FactionMap, OptionCount, RuleMode};
use crate::rules::Tally;

use super::record::FactionPopulation;

/// What resolving the current turn does, before it is committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutSummary {
    /// Options eliminated this turn.
    pub eliminated: EliminatedSet,

    /// Members lost per faction.
    pub deaths: FactionMap<u32>,

    /// Projected active population per faction after the deaths.
    pub survivors: FactionMap<u32>,

    /// Sum of `survivors` across all factions.
    pub survivors_total: u32,

    /// Whether the survivor total reached the terminal threshold.
    pub is_bout_over: bool,

    /// Factions with survivors; empty unless the bout is over.
    pub winners: Vec<FactionId>,
}

impl BoutSummary {
    /// Total members lost this turn.
    #[must_use]
    pub fn total_deaths(&self) -> u32 {
        self.deaths.sum()
    }
}

/// Immutable view of the game for front-ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub faction_names: Vec<String>,
    pub populations: FactionMap<FactionPopulation>,
    pub scores: FactionMap<u32>,
    pub round_number: u32,
    pub turn_number: u32,
    pub mode: RuleMode,
    pub option_count: OptionCount,
    pub terminal_threshold: u32,
    pub choices: Vec<Choice>,
    pub tally: Tally,
    pub resolving: bool,
}
