//! Declared choices: one living member's vote in the current turn.
//!
//! A choice is a (identity, faction, option) triple. The identity is opaque
//! and only used to remove a single vote again; nothing else depends on it.

use serde::{Deserialize, Serialize};

use super::faction::FactionId;
use super::option::OptionId;

/// Opaque identity of a cast choice, allocated by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoiceId(pub u32);

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One member's declared vote this turn.
///
/// ```
/// use elimination_engine::core::{Choice, ChoiceId, FactionId, OptionId};
///
/// let choice = Choice::new(ChoiceId(7), FactionId::new(2), OptionId::B);
/// assert!(choice.is_for(FactionId::new(2)));
/// assert_eq!(choice.option, OptionId::B);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub faction: FactionId,
    pub option: OptionId,
}

impl Choice {
    #[must_use]
    pub const fn new(id: ChoiceId, faction: FactionId, option: OptionId) -> Self {
        Self { id, faction, option }
    }

    /// Whether this choice was cast by `faction`.
    #[must_use]
    pub fn is_for(&self, faction: FactionId) -> bool {
        self.faction == faction
    }
}
