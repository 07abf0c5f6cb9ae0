//! Questions put to an external advisor.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::bout::BoutStateMachine;
use crate::core::{FactionId, OptionCount, OptionId, RuleMode};
use crate::error::ConfigError;
use crate::rules::{tally, Tally};
use crate::strategy::ScenarioContext;

/// A faction as the advisor sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionBrief {
    pub id: FactionId,
    pub name: String,
    /// Survivors in the current bout.
    pub active: u32,
}

/// Everything an advisor needs to propose an allocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorRequest {
    pub mode: RuleMode,
    pub option_count: OptionCount,

    /// Undecided members of the acting faction to allocate.
    pub remaining: u32,

    pub acting: FactionBrief,
    pub target: FactionBrief,

    /// All votes cast so far this turn.
    pub board: Tally,

    /// Votes cast so far, per faction that has voted.
    pub breakdown: FxHashMap<FactionId, Tally>,
}

impl AdvisorRequest {
    /// Build a request from the machine's current turn.
    pub fn from_machine(
        machine: &BoutStateMachine,
        acting: FactionId,
        target: FactionId,
        remaining: u32,
    ) -> Result<Self, ConfigError> {
        let brief = |id: FactionId| -> Result<FactionBrief, ConfigError> {
            let config = machine.config().faction(id).ok_or(ConfigError::UnknownFaction(id))?;
            Ok(FactionBrief {
                id,
                name: config.name.clone(),
                active: machine.active(id),
            })
        };

        let choices = machine.choices();
        let mut breakdown: FxHashMap<FactionId, Tally> = FxHashMap::default();
        for choice in choices {
            breakdown.entry(choice.faction).or_default()[choice.option] += 1;
        }

        Ok(Self {
            mode: machine.mode(),
            option_count: machine.option_count(),
            remaining,
            acting: brief(acting)?,
            target: brief(target)?,
            board: tally(choices),
            breakdown,
        })
    }

    /// Votes already cast by `faction`.
    #[must_use]
    pub fn votes_of(&self, faction: FactionId) -> Tally {
        self.breakdown.get(&faction).copied().unwrap_or_default()
    }

    /// Board as seen by the acting faction against the target.
    #[must_use]
    pub fn context(&self) -> ScenarioContext {
        ScenarioContext {
            base: self.board,
            target: self.votes_of(self.target.id),
            own: self.votes_of(self.acting.id),
        }
    }

    /// Natural-language rendering of the request for text-based advisors.
    #[must_use]
    pub fn prompt(&self) -> String {
        let rule = match self.mode {
            RuleMode::MajorityEliminated => "MAJORITY",
            RuleMode::MinorityEliminated => "MINORITY",
        };
        let c_votes = if self.option_count.contains(OptionId::C) {
            self.board[OptionId::C].to_string()
        } else {
            "N/A".to_string()
        };

        let mut factions: Vec<_> = self.breakdown.iter().collect();
        factions.sort_by_key(|(id, _)| **id);
        let breakdown = factions
            .iter()
            .map(|(id, t)| format!("  {}: {}", id, t))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Factions vote A, B (or C). The {rule} group is eliminated.\n\
             My faction: {} (active {})\n\
             Target: {} (active {})\n\
             Votes on board: A: {} B: {} C: {}\n\
             Votes by faction:\n{}\n\
             I have {} undecided members. Distribute them over the options to \
             maximise losses for {} and minimise losses for {}. \
             Answer as JSON with integer fields a, b, c and a string field reasoning.",
            self.acting.name,
            self.acting.active,
            self.target.name,
            self.target.active,
            self.board[OptionId::A],
            self.board[OptionId::B],
            c_votes,
            breakdown,
            self.remaining,
            self.target.name,
            self.acting.name,
        )
    }
}
