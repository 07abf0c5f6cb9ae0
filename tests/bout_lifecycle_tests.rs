//! Bout lifecycle tests.
//!
//! These drive the state machine through whole turns and rounds the way a
//! front-end would: cast, resolve, confirm.

use elimination_engine::bout::BoutStateMachine;
use elimination_engine::core::{FactionId, GameConfig, OptionCount, OptionId, RuleMode};
use elimination_engine::error::{ConfigError, StateError};

fn cast(machine: &mut BoutStateMachine, faction: u8, option: OptionId, n: u32) {
    for _ in 0..n {
        machine.cast_choice(FactionId::new(faction), option).unwrap();
    }
}

/// Four factions of five: a first turn that thins them to [1, 2, 1, 2], then
/// a second turn that leaves only faction 2's last member standing.
#[test]
fn test_two_turn_bout() {
    let mut machine = BoutStateMachine::new(GameConfig::with_populations(&[5, 5, 5, 5])).unwrap();

    // Turn 1: A=14, B=6, majority A dies.
    cast(&mut machine, 0, OptionId::A, 4);
    cast(&mut machine, 0, OptionId::B, 1);
    cast(&mut machine, 1, OptionId::A, 3);
    cast(&mut machine, 1, OptionId::B, 2);
    cast(&mut machine, 2, OptionId::A, 4);
    cast(&mut machine, 2, OptionId::B, 1);
    cast(&mut machine, 3, OptionId::A, 3);
    cast(&mut machine, 3, OptionId::B, 2);

    let summary = machine.resolve_turn();
    assert_eq!(summary.eliminated.as_slice(), &[OptionId::A]);
    assert_eq!(summary.deaths.as_slice(), &[4, 3, 4, 3]);
    assert_eq!(summary.survivors.as_slice(), &[1, 2, 1, 2]);
    assert_eq!(summary.survivors_total, 6);
    assert!(!summary.is_bout_over);

    machine.confirm_resolution().unwrap();
    assert_eq!(machine.active_populations().as_slice(), &[1, 2, 1, 2]);
    assert_eq!(machine.round_number(), 1);
    assert_eq!(machine.turn_number(), 2);
    assert!(machine.choices().is_empty());

    // Turn 2: A=5, B=1. Only faction 2 backed B.
    cast(&mut machine, 0, OptionId::A, 1);
    cast(&mut machine, 1, OptionId::A, 2);
    cast(&mut machine, 2, OptionId::B, 1);
    cast(&mut machine, 3, OptionId::A, 2);

    let summary = machine.resolve_turn();
    assert_eq!(summary.survivors.as_slice(), &[0, 0, 1, 0]);
    assert!(summary.is_bout_over);
    assert_eq!(summary.winners, vec![FactionId::new(2)]);

    machine.confirm_resolution().unwrap();
    assert_eq!(machine.scores().as_slice(), &[0, 0, 1, 0]);
    assert_eq!(machine.active_populations().as_slice(), &[5, 5, 5, 5]);
    assert_eq!(machine.round_number(), 2);
    assert_eq!(machine.turn_number(), 1);

    // Both resolved turns are kept with their snapshots.
    let history = machine.history();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|t| t.is_completed));
    assert_eq!(history[0].snapshot.as_ref().unwrap().as_slice(), &[1, 2, 1, 2]);
    assert_eq!(history[1].snapshot.as_ref().unwrap().as_slice(), &[0, 0, 1, 0]);
}

/// Scores accumulate over several bouts.
#[test]
fn test_scores_accumulate_across_rounds() {
    let mut machine = BoutStateMachine::new(GameConfig::with_populations(&[2, 1])).unwrap();

    for round in 1..=3 {
        // Faction 0 sits on A (majority), faction 1 on B: 0 survivors vs 1.
        cast(&mut machine, 0, OptionId::A, 2);
        cast(&mut machine, 1, OptionId::B, 1);
        machine.resolve_turn();
        let summary = machine.confirm_resolution().unwrap();

        assert!(summary.is_bout_over);
        assert_eq!(machine.round_number(), round + 1);
    }

    assert_eq!(machine.scores().as_slice(), &[0, 3]);
}

#[test]
fn test_minority_mode_bout() {
    let config = GameConfig::with_populations(&[3, 3]).with_mode(RuleMode::MinorityEliminated);
    let mut machine = BoutStateMachine::new(config).unwrap();

    cast(&mut machine, 0, OptionId::A, 3);
    cast(&mut machine, 1, OptionId::A, 2);
    cast(&mut machine, 1, OptionId::B, 1);

    let summary = machine.resolve_turn();
    assert_eq!(summary.eliminated.as_slice(), &[OptionId::B]);
    assert_eq!(summary.survivors.as_slice(), &[3, 2]);
}

#[test]
fn test_three_option_tie_eliminates_everyone() {
    let config = GameConfig::with_populations(&[3, 3]).with_option_count(OptionCount::Three);
    let mut machine = BoutStateMachine::new(config).unwrap();

    cast(&mut machine, 0, OptionId::A, 1);
    cast(&mut machine, 0, OptionId::B, 1);
    cast(&mut machine, 0, OptionId::C, 1);
    cast(&mut machine, 1, OptionId::A, 1);
    cast(&mut machine, 1, OptionId::B, 1);
    cast(&mut machine, 1, OptionId::C, 1);

    let summary = machine.resolve_turn();
    assert_eq!(summary.eliminated.len(), 3);
    assert_eq!(summary.survivors_total, 0);
    assert!(summary.is_bout_over);
    assert!(summary.winners.is_empty());
}

#[test]
fn test_cancel_then_amend() {
    let mut machine = BoutStateMachine::new(GameConfig::with_populations(&[2, 2])).unwrap();
    let id = machine.cast_choice(FactionId::new(0), OptionId::A).unwrap();
    machine.resolve_turn();

    assert_eq!(machine.remove_choice(id), Err(StateError::ResolutionPending));
    machine.cancel_resolution().unwrap();
    assert!(!machine.is_resolving());

    machine.remove_choice(id).unwrap();
    machine.cast_choice(FactionId::new(0), OptionId::B).unwrap();
    let summary = machine.resolve_turn();
    assert_eq!(summary.eliminated.as_slice(), &[OptionId::B]);
}

#[test]
fn test_reset_keeps_rule_settings() {
    let mut machine = BoutStateMachine::new(GameConfig::reference()).unwrap();
    machine.set_mode(RuleMode::MinorityEliminated).unwrap();
    machine.set_option_count(OptionCount::Three).unwrap();
    cast(&mut machine, 0, OptionId::C, 2);
    machine.resolve_turn();
    machine.confirm_resolution().unwrap();

    machine.reset();

    assert_eq!(machine.mode(), RuleMode::MinorityEliminated);
    assert_eq!(machine.option_count(), OptionCount::Three);
    assert_eq!(machine.active_populations().as_slice(), &[15, 6, 9, 9]);
    assert_eq!(machine.round_number(), 1);
    assert_eq!(machine.turn_number(), 1);
    assert!(machine.history().is_empty());
}

// === Capacity edits ===

#[test]
fn test_edit_capacity_on_first_turn_sets_active() {
    let mut machine = BoutStateMachine::new(GameConfig::reference()).unwrap();
    let fire = FactionId::new(3);

    machine.edit_capacity(fire, 12).unwrap();

    assert_eq!(machine.total(fire), 12);
    assert_eq!(machine.active(fire), 12);
}

#[test]
fn test_edit_capacity_later_leaves_active() {
    let mut machine = BoutStateMachine::new(GameConfig::with_populations(&[4, 4])).unwrap();
    cast(&mut machine, 0, OptionId::A, 3);
    cast(&mut machine, 0, OptionId::B, 1);
    machine.resolve_turn();
    machine.confirm_resolution().unwrap();
    assert_eq!(machine.turn_number(), 2);
    assert_eq!(machine.active(FactionId::new(0)), 1);

    machine.edit_capacity(FactionId::new(0), 10).unwrap();

    assert_eq!(machine.total(FactionId::new(0)), 10);
    assert_eq!(machine.active(FactionId::new(0)), 1);
}

#[test]
fn test_edit_capacity_rejects_negative() {
    let mut machine = BoutStateMachine::new(GameConfig::reference()).unwrap();
    let err = machine.edit_capacity(FactionId::new(0), -1).unwrap_err();

    assert_eq!(
        err,
        StateError::Config(ConfigError::NegativePopulation {
            faction: FactionId::new(0),
            value: -1,
        })
    );
    assert_eq!(machine.total(FactionId::new(0)), 15);
}

#[test]
fn test_snapshot_serializes() {
    let mut machine = BoutStateMachine::new(GameConfig::reference()).unwrap();
    cast(&mut machine, 1, OptionId::B, 2);

    let json = serde_json::to_string(&machine.snapshot()).unwrap();
    assert!(json.contains("Water"));
}
