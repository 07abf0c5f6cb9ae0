//! Per-faction population counters and turn records.

use serde::{Deserialize, Serialize};

use crate::core::{Choice, FactionId, FactionMap};

/// Population counters of one faction.
///
/// `active` never exceeds `total`. It only drops through elimination and
/// only comes back through a capacity edit or a bout reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionPopulation {
    /// Configured capacity.
    pub total: u32,
    /// Survivors in the current bout.
    pub active: u32,
}

impl FactionPopulation {
    /// A faction at full strength.
    #[must_use]
    pub const fn full(total: u32) -> Self {
        Self { total, active: total }
    }

    /// Restore full strength for a new bout.
    pub fn restore(&mut self) {
        self.active = self.total;
    }
}

/// One turn: the choices cast since the last resolution.
///
/// Once resolved the record is terminal (`is_completed`) and carries the
/// active populations that resulted from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Round (bout) this turn belongs to, starting at 1.
    pub round_number: u32,

    /// Turn within the round, starting at 1.
    pub turn_number: u32,

    /// Choices in the order they were cast.
    pub choices: Vec<Choice>,

    pub is_completed: bool,

    /// Active populations after this turn was resolved.
    pub snapshot: Option<FactionMap<u32>>,
}

impl TurnRecord {
    /// A fresh, empty turn.
    #[must_use]
    pub fn new(round_number: u32, turn_number: u32) -> Self {
        Self {
            round_number,
            turn_number,
            choices: Vec::new(),
            is_completed: false,
            snapshot: None,
        }
    }

    /// Number of choices cast by `faction`.
    #[must_use]
    pub fn cast_by(&self, faction: FactionId) -> u32 {
        self.choices.iter().filter(|c| c.is_for(faction)).count() as u32
    }

    /// Whether this is the first turn of its round.
    #[must_use]
    pub fn opens_round(&self) -> bool {
        self.turn_number == 1
    }
}
