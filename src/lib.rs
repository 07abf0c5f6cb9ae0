//! # elimination-engine
//!
//! Engine for a multi-faction elimination game. Each turn every surviving
//! member of every faction secretly picks one of two or three options; the
//! most popular (or least popular) option is eliminated together with every
//! member who picked it. A bout ends once the survivors across all factions
//! fall to a small threshold, and each faction scores its own survivors.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Tallying, elimination and scenario evaluation are
//!    deterministic functions over counts. No I/O, no clocks.
//!
//! 2. **N-Faction First**: Every API takes the faction count from the
//!    configuration. Nothing assumes four factions.
//!
//! 3. **Configuration Over Convention**: Rule mode, option count, terminal
//!    threshold and the strategist's weighting are all configured values.
//!
//! ## Modules
//!
//! - `core`: Faction IDs, options, choices, configuration, RNG
//! - `rules`: Tallying and the elimination rule
//! - `strategy`: Scenario evaluation and exhaustive allocation search
//! - `bout`: Bout state machine, turn records, summaries
//! - `advisor`: Boundary to external allocation advisors
//! - `sim`: Seeded random play
//! - `error`: Error types

pub mod core;
pub mod rules;
pub mod strategy;
pub mod bout;
pub mod advisor;
pub mod sim;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    FactionId, FactionMap, EliminatedSet,
    OptionId, OptionCount,
    Choice, ChoiceId,
    FactionConfig, GameConfig, RuleMode,
    GameRng,
};

pub use crate::rules::{eliminated, tally, Tally};

pub use crate::strategy::{
    evaluate, best_move, Allocation, AllocationSearch,
    ScenarioContext, ScenarioResult, SearchConfig, SearchStats,
};

pub use crate::bout::{BoutStateMachine, BoutSummary, FactionPopulation, GameSnapshot, TurnRecord};

pub use crate::advisor::{consult, Advisor, AdvisorRequest, Proposal, ReviewedProposal, SearchAdvisor};

pub use crate::sim::{PlayConfig, PlayReport, RandomPlayer};

pub use crate::error::{AdvisorError, ConfigError, StateError};
