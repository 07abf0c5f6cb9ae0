//! Core engine types: factions, options, choices, configuration, RNG.
//!
//! These are the building blocks shared by the tally rules, the strategy
//! search and the bout state machine.

pub mod faction;
pub mod option;
pub mod choice;
pub mod config;
pub mod rng;

pub use faction::{FactionId, FactionMap};
pub use option::{EliminatedSet, OptionCount, OptionId};
pub use choice::{Choice, ChoiceId};
pub use config::{FactionConfig, GameConfig, RuleMode, DEFAULT_TERMINAL_THRESHOLD};
pub use rng::GameRng;
