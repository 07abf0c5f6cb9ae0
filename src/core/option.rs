//! Turn options and the active option set.
//!
//! Every turn offers either two options (`A`, `B`) or three (`A`, `B`, `C`).
//! The set is ordered; enumeration order matters for deterministic
//! tie-breaking in the allocation search.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ConfigError;

/// One of the options a faction member can choose in a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionId {
    A,
    B,
    C,
}

impl OptionId {
    /// All options in canonical order.
    pub const ALL: [OptionId; 3] = [OptionId::A, OptionId::B, OptionId::C];

    /// Position of this option in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            OptionId::A => 0,
            OptionId::B => 1,
            OptionId::C => 2,
        }
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OptionId::A => "A",
            OptionId::B => "B",
            OptionId::C => "C",
        };
        f.write_str(name)
    }
}

/// Size of the active option set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionCount {
    /// Options `A` and `B`.
    #[default]
    Two,
    /// Options `A`, `B` and `C`.
    Three,
}

impl OptionCount {
    /// Number of active options.
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            OptionCount::Two => 2,
            OptionCount::Three => 3,
        }
    }

    /// Active options in canonical order.
    #[must_use]
    pub fn active(self) -> &'static [OptionId] {
        &OptionId::ALL[..self.len()]
    }

    /// Whether `option` is part of this option set.
    #[must_use]
    pub const fn contains(self, option: OptionId) -> bool {
        option.index() < self.len()
    }
}

impl TryFrom<usize> for OptionCount {
    type Error = ConfigError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(OptionCount::Two),
            3 => Ok(OptionCount::Three),
            other => Err(ConfigError::InvalidOptionCount(other)),
        }
    }
}

/// Set of options eliminated in a turn. Never holds more than three entries.
pub type EliminatedSet = SmallVec<[OptionId; 3]>;
