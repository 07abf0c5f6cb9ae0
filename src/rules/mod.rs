//! Turn rules: counting choices and deciding which options die.
//!
//! Everything here is a pure function of its inputs. The bout state machine
//! and the strategy search both call into this module; neither reimplements
//! the elimination rule.

pub mod tally;

pub use tally::{eliminated, tally, Tally};
