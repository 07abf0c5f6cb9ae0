//! Error types for configuration, state transitions and the advisor boundary.
//!
//! The pure engine functions (`tally`, `eliminated`, `evaluate`, `best_move`)
//! never fail; errors only surface where a caller mutates state or talks to
//! an external collaborator.

use thiserror::Error;

use crate::core::{ChoiceId, FactionId, OptionId};

/// Rejected configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("option count must be 2 or 3, got {0}")]
    InvalidOptionCount(usize),
    #[error("at least one faction must be configured")]
    NoFactions,
    #[error("at most 255 factions are supported, got {0}")]
    TooManyFactions(usize),
    #[error("population for {faction} must be non-negative, got {value}")]
    NegativePopulation { faction: FactionId, value: i64 },
    #[error("population for {faction} is too large: {value}")]
    PopulationOverflow { faction: FactionId, value: i64 },
    #[error("unknown faction {0}")]
    UnknownFaction(FactionId),
}

/// Rejected state-machine commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("all {active} surviving members of {faction} have already chosen")]
    FactionSaturated { faction: FactionId, active: u32 },
    #[error("option {0} is not part of the active option set")]
    InactiveOption(OptionId),
    #[error("no choice with id {0} in the current turn")]
    UnknownChoice(ChoiceId),
    #[error("a resolution is pending; confirm or cancel it first")]
    ResolutionPending,
    #[error("no resolution is pending")]
    NoPendingResolution,
    #[error("{count} choices for option C exist in the current turn")]
    OptionInUse { count: u32 },
}

/// Failures reported by an external allocation advisor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("advisor unavailable: {0}")]
    Unavailable(String),
    #[error("advisor timed out after {0} ms")]
    Timeout(u64),
    #[error("advisor returned an empty response")]
    Empty,
    #[error("advisor returned a malformed payload: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for AdvisorError {
    fn from(err: serde_json::Error) -> Self {
        AdvisorError::Malformed(err.to_string())
    }
}
