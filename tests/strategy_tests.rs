//! Allocation search tests against full boards.

use elimination_engine::bout::BoutStateMachine;
use elimination_engine::core::{FactionId, GameConfig, OptionCount, OptionId, RuleMode};
use elimination_engine::strategy::{best_move, Allocation};
use elimination_engine::advisor::{consult, AdvisorRequest, SearchAdvisor};

const BYSTANDER: FactionId = FactionId(0);
const RIVAL: FactionId = FactionId(1);
const ME: FactionId = FactionId(2);

/// Rival sits on the majority option; our undecided members go elsewhere.
#[test]
fn test_undecided_routed_off_the_majority() {
    let mut machine = BoutStateMachine::new(GameConfig::reference()).unwrap();
    machine.cast_choice(RIVAL, OptionId::A).unwrap();
    machine.cast_choice(RIVAL, OptionId::A).unwrap();
    machine.cast_choice(BYSTANDER, OptionId::A).unwrap();
    machine.cast_choice(BYSTANDER, OptionId::A).unwrap();
    machine.cast_choice(BYSTANDER, OptionId::B).unwrap();

    let best = machine.best_move(ME, RIVAL, 2).unwrap().unwrap();

    assert_eq!(best.allocation, Allocation::new(0, 2, 0));
    assert_eq!(best.target_loss, 2);
    assert_eq!(best.self_loss, 0);
}

/// With A=3 B=1 on the board, stacking both members on B forces a 3-3 tie
/// and loses them; splitting keeps A the sole majority.
#[test]
fn test_split_beats_forcing_a_tie() {
    let mut machine = BoutStateMachine::new(GameConfig::reference()).unwrap();
    machine.cast_choice(RIVAL, OptionId::A).unwrap();
    machine.cast_choice(RIVAL, OptionId::A).unwrap();
    machine.cast_choice(BYSTANDER, OptionId::A).unwrap();
    machine.cast_choice(BYSTANDER, OptionId::B).unwrap();

    let stacked = machine.evaluate(ME, RIVAL, &Allocation::new(0, 2, 0));
    assert_eq!(stacked.target_loss, 2);
    assert_eq!(stacked.self_loss, 2);

    let best = machine.best_move(ME, RIVAL, 2).unwrap().unwrap();
    assert_eq!(best.allocation, Allocation::new(1, 1, 0));
    assert_eq!(best.target_loss, 2);
    assert_eq!(best.self_loss, 1);
}

#[test]
fn test_free_function_matches_machine() {
    let mut machine = BoutStateMachine::new(GameConfig::reference().with_option_count(OptionCount::Three)).unwrap();
    machine.cast_choice(RIVAL, OptionId::C).unwrap();
    machine.cast_choice(RIVAL, OptionId::C).unwrap();
    machine.cast_choice(BYSTANDER, OptionId::B).unwrap();

    let direct = best_move(
        machine.choices(),
        ME,
        RIVAL,
        3,
        RuleMode::MajorityEliminated,
        OptionCount::Three,
    );
    let via_machine = machine.best_move(ME, RIVAL, 3).unwrap();

    assert_eq!(direct, via_machine);
    assert_eq!(machine.search().stats().compositions_evaluated, 10);
}

#[test]
fn test_search_advisor_agrees_with_suggest() {
    let mut machine = BoutStateMachine::new(GameConfig::reference()).unwrap();
    for _ in 0..4 {
        machine.cast_choice(RIVAL, OptionId::B).unwrap();
    }
    machine.cast_choice(ME, OptionId::A).unwrap();

    let remaining = machine.undecided(ME);
    let request = AdvisorRequest::from_machine(&machine, ME, RIVAL, remaining).unwrap();
    let reviewed = consult(&SearchAdvisor::default(), &request).unwrap();
    let suggested = machine.suggest(ME, RIVAL).unwrap().unwrap();

    assert_eq!(reviewed.result, suggested);
    assert!(!reviewed.sum_mismatch);
}
