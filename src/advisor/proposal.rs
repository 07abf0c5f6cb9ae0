//! Allocations proposed by an external advisor, and their review.
//!
//! Proposals are untrusted. Counts are clamped to non-negative values, a sum
//! that differs from the requested number of undecided members is tolerated
//! but flagged, and the losses reported to the caller always come from the
//! engine's own evaluation.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;
use crate::strategy::{Allocation, ScenarioResult};

use super::request::AdvisorRequest;

const DEFAULT_RATIONALE: &str = "advisor suggestion";

/// An allocation proposed by an advisor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub allocation: Allocation,
    pub rationale: String,
}

/// Wire shape of an advisor answer. Every field is optional; integers may
/// arrive negative and are clamped.
#[derive(Debug, Deserialize)]
struct RawProposal {
    a: Option<i64>,
    b: Option<i64>,
    c: Option<i64>,
    #[serde(alias = "reasoning")]
    rationale: Option<String>,
}

fn clamp_count(field: &str, value: Option<i64>) -> u32 {
    let value = value.unwrap_or(0);
    let clamped = value.clamp(0, i64::from(u32::MAX)) as u32;
    if i64::from(clamped) != value {
        warn!("advisor field {} out of range ({}), using {}", field, value, clamped);
    }
    clamped
}

impl Proposal {
    pub fn new(allocation: Allocation, rationale: impl Into<String>) -> Self {
        Self {
            allocation,
            rationale: rationale.into(),
        }
    }

    /// Parse an advisor's JSON answer, e.g.
    /// `{"a": 0, "b": 2, "c": 0, "reasoning": "..."}`.
    pub fn from_json(text: &str) -> Result<Self, AdvisorError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AdvisorError::Empty);
        }
        let raw: RawProposal = serde_json::from_str(text)?;

        let rationale = raw
            .rationale
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RATIONALE.to_string());

        Ok(Self {
            allocation: Allocation::new(
                clamp_count("a", raw.a),
                clamp_count("b", raw.b),
                clamp_count("c", raw.c),
            ),
            rationale,
        })
    }
}

/// A proposal after the engine re-scored it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewedProposal {
    /// Engine-computed consequences of the proposed allocation.
    pub result: ScenarioResult,

    pub rationale: String,

    /// Undecided members the advisor was asked to place.
    pub requested: u32,

    /// Whether the proposed allocation places a different number of members.
    pub sum_mismatch: bool,
}

/// Re-evaluate `proposal` on the board described by `request`.
#[must_use]
pub fn review(proposal: Proposal, request: &AdvisorRequest) -> ReviewedProposal {
    let placed = proposal.allocation.total();
    let sum_mismatch = placed != request.remaining;
    if sum_mismatch {
        warn!(
            "advisor placed {} members but {} were undecided; scoring as proposed",
            placed, request.remaining
        );
    }

    let result = request
        .context()
        .evaluate(&proposal.allocation, request.mode, request.option_count);

    ReviewedProposal {
        result,
        rationale: proposal.rationale,
        requested: request.remaining,
        sum_mismatch,
    }
}
