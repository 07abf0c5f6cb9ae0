//! Game configuration types.
//!
//! Front-ends configure the engine at startup by providing:
//! - `FactionConfig`: one entry per faction (name, starting population)
//! - `RuleMode`: which option dies each turn
//! - `GameConfig`: combines all configuration
//!
//! The engine never hardcodes the faction set or population figures;
//! `GameConfig::reference()` is only the default four-faction setup.

use serde::{Deserialize, Serialize};

use super::faction::{FactionId, FactionMap};
use super::option::OptionCount;
use crate::error::ConfigError;

/// Elimination rule applied at the end of every turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleMode {
    /// The most-chosen option(s) are eliminated.
    #[default]
    MajorityEliminated,
    /// The least-chosen option(s) are eliminated.
    MinorityEliminated,
}

impl std::fmt::Display for RuleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleMode::MajorityEliminated => f.write_str("majority eliminated"),
            RuleMode::MinorityEliminated => f.write_str("minority eliminated"),
        }
    }
}

/// Configuration for a single faction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionConfig {
    /// Human-readable name (for display and advisor prompts).
    pub name: String,

    /// Population cap at game start. Also the initial active population.
    pub initial_population: u32,
}

impl FactionConfig {
    pub fn new(name: impl Into<String>, initial_population: u32) -> Self {
        Self {
            name: name.into(),
            initial_population,
        }
    }
}

/// Bout ends once total survivors across all factions drop to this value.
pub const DEFAULT_TERMINAL_THRESHOLD: u32 = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Faction set, in `FactionId` order.
    pub factions: Vec<FactionConfig>,

    /// Elimination rule at game start.
    #[serde(default)]
    pub mode: RuleMode,

    /// Active option set size at game start.
    #[serde(default)]
    pub option_count: OptionCount,

    /// Survivor total at or below which a bout is over.
    #[serde(default = "default_terminal_threshold")]
    pub terminal_threshold: u32,
}

fn default_terminal_threshold() -> u32 {
    DEFAULT_TERMINAL_THRESHOLD
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl GameConfig {
    /// Create a configuration from a list of factions with default rules.
    pub fn new(factions: Vec<FactionConfig>) -> Self {
        Self {
            factions,
            mode: RuleMode::default(),
            option_count: OptionCount::default(),
            terminal_threshold: DEFAULT_TERMINAL_THRESHOLD,
        }
    }

    /// The four-faction reference setup: Gold 15, Water 6, Wood 9, Fire 9.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(vec![
            FactionConfig::new("Gold", 15),
            FactionConfig::new("Water", 6),
            FactionConfig::new("Wood", 9),
            FactionConfig::new("Fire", 9),
        ])
    }

    /// Create a configuration with unnamed factions and the given populations.
    pub fn with_populations(populations: &[u32]) -> Self {
        Self::new(
            populations
                .iter()
                .enumerate()
                .map(|(i, &p)| FactionConfig::new(format!("Faction {}", i), p))
                .collect(),
        )
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RuleMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_option_count(mut self, option_count: OptionCount) -> Self {
        self.option_count = option_count;
        self
    }

    #[must_use]
    pub fn with_terminal_threshold(mut self, threshold: u32) -> Self {
        self.terminal_threshold = threshold;
        self
    }

    /// Number of configured factions.
    #[must_use]
    pub fn faction_count(&self) -> usize {
        self.factions.len()
    }

    /// Get a faction's configuration.
    #[must_use]
    pub fn faction(&self, id: FactionId) -> Option<&FactionConfig> {
        self.factions.get(id.index())
    }

    /// Display name of a faction, falling back to its numeric id.
    #[must_use]
    pub fn faction_name(&self, id: FactionId) -> String {
        self.faction(id)
            .map_or_else(|| id.to_string(), |f| f.name.clone())
    }

    /// Initial populations in faction order.
    #[must_use]
    pub fn initial_populations(&self) -> FactionMap<u32> {
        FactionMap::from_vec(self.factions.iter().map(|f| f.initial_population).collect())
    }

    /// Check the configuration before it is handed to the state machine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.factions.is_empty() {
            return Err(ConfigError::NoFactions);
        }
        if self.factions.len() > 255 {
            return Err(ConfigError::TooManyFactions(self.factions.len()));
        }
        Ok(())
    }
}
