//! Allocation strategy: scenario projection and best-move search.
//!
//! ## Overview
//!
//! - `scenario`: project one allocation of undecided members onto the board
//! - `search`: enumerate every allocation and keep the best-scoring one
//!
//! ## Usage
//!
//! ```rust
//! use elimination_engine::core::{Choice, ChoiceId, FactionId, OptionCount, OptionId, RuleMode};
//! use elimination_engine::strategy::{AllocationSearch, SearchConfig};
//!
//! let rival = FactionId::new(1);
//! let me = FactionId::new(2);
//! let board = vec![
//!     Choice::new(ChoiceId(0), rival, OptionId::A),
//!     Choice::new(ChoiceId(1), rival, OptionId::A),
//! ];
//!
//! let mut search = AllocationSearch::new(SearchConfig::default());
//! let best = search
//!     .best_move(&board, me, rival, 1, RuleMode::MajorityEliminated, OptionCount::Two)
//!     .unwrap();
//! assert_eq!(best.allocation.b, 1);
//! assert_eq!(best.target_loss, 2);
//! ```

pub mod config;
pub mod scenario;
pub mod search;
pub mod stats;

pub use config::{SearchConfig, DEFAULT_SELF_LOSS_WEIGHT};
pub use scenario::{evaluate, Allocation, ScenarioContext, ScenarioResult};
pub use search::{best_move, composition_count, compositions, AllocationSearch};
pub use stats::SearchStats;
