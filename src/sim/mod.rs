//! Simulated play.
//!
//! `RandomPlayer` fills every turn with seeded random choices, optionally
//! letting one faction follow the allocation search, and plays the machine
//! through whole bouts. Used for smoke-testing rule variants and for
//! benchmarking the engine under realistic boards.

pub mod driver;

pub use driver::{cast_allocation, PlayConfig, PlayReport, RandomPlayer};
