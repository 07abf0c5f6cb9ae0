//! Bout lifecycle: populations, turns, rounds and scoring.
//!
//! A bout is the sequence of turns within one round. It ends when the
//! survivors across all factions drop to the terminal threshold; every
//! faction then scores its own survivors and returns to full strength.

pub mod machine;
pub mod record;
pub mod summary;

pub use machine::BoutStateMachine;
pub use record::{FactionPopulation, TurnRecord};
pub use summary::{BoutSummary, GameSnapshot};
