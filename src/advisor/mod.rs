//! Boundary to an external allocation advisor.
//!
//! An advisor (a remote model, a human, a scripted bot) receives an
//! `AdvisorRequest` and answers with a `Proposal`. The engine never performs
//! the I/O itself and never trusts the advisor's own damage estimate:
//! `consult` always re-scores the proposal with the scenario evaluator.
//!
//! A failing advisor is reported as `AdvisorError`. Falling back to the
//! deterministic search is the caller's decision, made by consulting
//! `SearchAdvisor` explicitly.
//!
//! ```
//! use elimination_engine::advisor::{consult, AdvisorRequest, Proposal};
//! use elimination_engine::bout::BoutStateMachine;
//! use elimination_engine::core::{FactionId, GameConfig, OptionId};
//! use elimination_engine::error::AdvisorError;
//!
//! let mut machine = BoutStateMachine::new(GameConfig::reference()).unwrap();
//! machine.cast_choice(FactionId::new(1), OptionId::A).unwrap();
//!
//! let request = AdvisorRequest::from_machine(&machine, FactionId::new(2), FactionId::new(1), 1).unwrap();
//! let advisor = |_: &AdvisorRequest| -> Result<Proposal, AdvisorError> {
//!     Proposal::from_json(r#"{"a": 0, "b": 1, "c": 0, "reasoning": "tie it up"}"#)
//! };
//!
//! let reviewed = consult(&advisor, &request).unwrap();
//! assert_eq!(reviewed.result.target_loss, 1);
//! assert_eq!(reviewed.result.self_loss, 1);
//! ```

pub mod proposal;
pub mod request;

pub use proposal::{review, Proposal, ReviewedProposal};
pub use request::{AdvisorRequest, FactionBrief};

use crate::error::AdvisorError;
use crate::strategy::{AllocationSearch, SearchConfig};

/// Source of proposed allocations.
pub trait Advisor {
    /// Propose an allocation of `request.remaining` members.
    fn propose(&self, request: &AdvisorRequest) -> Result<Proposal, AdvisorError>;
}

impl<F> Advisor for F
where
    F: Fn(&AdvisorRequest) -> Result<Proposal, AdvisorError>,
{
    fn propose(&self, request: &AdvisorRequest) -> Result<Proposal, AdvisorError> {
        self(request)
    }
}

/// Advisor backed by the engine's own exhaustive search.
#[derive(Clone, Debug, Default)]
pub struct SearchAdvisor {
    config: SearchConfig,
}

impl SearchAdvisor {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Advisor for SearchAdvisor {
    fn propose(&self, request: &AdvisorRequest) -> Result<Proposal, AdvisorError> {
        let mut search = AllocationSearch::new(self.config.clone());
        search
            .search(&request.context(), request.remaining, request.mode, request.option_count)
            .map(|best| Proposal::new(best.allocation, "exhaustive search"))
            .ok_or_else(|| AdvisorError::Unavailable("search produced no allocation".to_string()))
    }
}

/// Ask `advisor` for a proposal and re-score it on the request's board.
pub fn consult<A: Advisor + ?Sized>(advisor: &A, request: &AdvisorRequest) -> Result<ReviewedProposal, AdvisorError> {
    let proposal = advisor.propose(request)?;
    Ok(review(proposal, request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bout::BoutStateMachine;
    use crate::core::{FactionId, GameConfig, OptionId};
    use crate::strategy::Allocation;

    fn board() -> BoutStateMachine {
        let mut m = BoutStateMachine::new(GameConfig::reference()).unwrap();
        for _ in 0..4 {
            m.cast_choice(FactionId::new(0), OptionId::A).unwrap();
        }
        m.cast_choice(FactionId::new(0), OptionId::B).unwrap();
        m.cast_choice(FactionId::new(1), OptionId::A).unwrap();
        m.cast_choice(FactionId::new(1), OptionId::A).unwrap();
        m
    }

    #[test]
    fn test_advisor_numbers_are_recomputed() {
        let m = board();
        let request = AdvisorRequest::from_machine(&m, FactionId::new(2), FactionId::new(1), 2).unwrap();

        // Advisor claims nothing about losses; engine works them out.
        let advisor = |_: &AdvisorRequest| -> Result<Proposal, AdvisorError> {
            Ok(Proposal::new(Allocation::new(2, 0, 0), "pile on"))
        };
        let reviewed = consult(&advisor, &request).unwrap();

        assert_eq!(reviewed.result.target_loss, 2);
        assert_eq!(reviewed.result.self_loss, 2);
        assert!(!reviewed.sum_mismatch);
        assert_eq!(reviewed.rationale, "pile on");
    }

    #[test]
    fn test_sum_mismatch_tolerated() {
        let m = board();
        let request = AdvisorRequest::from_machine(&m, FactionId::new(2), FactionId::new(1), 2).unwrap();

        let advisor = |_: &AdvisorRequest| -> Result<Proposal, AdvisorError> {
            Ok(Proposal::new(Allocation::new(0, 5, 0), "overshoot"))
        };
        let reviewed = consult(&advisor, &request).unwrap();

        assert!(reviewed.sum_mismatch);
        assert_eq!(reviewed.requested, 2);
        assert_eq!(reviewed.result.allocation, Allocation::new(0, 5, 0));
        // A=6 B=6: both options die, including all five placed members.
        assert_eq!(reviewed.result.self_loss, 5);
    }

    #[test]
    fn test_failure_is_surfaced() {
        let m = board();
        let request = AdvisorRequest::from_machine(&m, FactionId::new(2), FactionId::new(1), 2).unwrap();

        let advisor = |_: &AdvisorRequest| -> Result<Proposal, AdvisorError> { Err(AdvisorError::Timeout(30_000)) };
        let err = consult(&advisor, &request).unwrap_err();

        assert_eq!(err, AdvisorError::Timeout(30_000));
        assert_eq!(err.to_string(), "advisor timed out after 30000 ms");
    }

    #[test]
    fn test_search_advisor_matches_best_move() {
        let mut m = board();
        let request = AdvisorRequest::from_machine(&m, FactionId::new(2), FactionId::new(1), 2).unwrap();

        let reviewed = consult(&SearchAdvisor::default(), &request).unwrap();
        let best = m.best_move(FactionId::new(2), FactionId::new(1), 2).unwrap().unwrap();

        assert_eq!(reviewed.result, best);
        assert_eq!(best.allocation, Allocation::new(0, 2, 0));
    }
}
