//! Integration test: Gate runs through a session
//!
//! Tests generation, the floor and event state machine, reward crediting on
//! finish, and the combat loop pausing while a run is active.

use monarch::core::TimerId;
use monarch::gates::{Biome, FloorType, GateOutcome, GateStatus, RunStep};
use monarch::ledger::Currency;
use monarch::{ActionError, GameConfig, Session};
use std::time::Duration;

fn seeded(seed: u64) -> Session {
    Session::new(GameConfig::veteran().with_seed(seed))
}

/// Plays the active run to the end, taking the first option of every event.
fn play_out(session: &mut Session) {
    for _ in 0..64 {
        let status = match &session.state().gate {
            Some(run) => run.status,
            None => return,
        };
        if status == GateStatus::Event {
            session.resolve_event(0).unwrap();
        } else if let RunStep::Finished(_) = session.advance_floor().unwrap() {
            return;
        }
    }
    panic!("gate run did not finish");
}

#[test]
fn test_depth_five_layout() {
    let mut session = seeded(5);
    let run = session.generate_gate(Biome::ShadowCrypt, 5).unwrap();

    assert_eq!(run.name, "Shadow Crypt (Depth 5)");
    assert_eq!(run.floors.len(), 5);
    assert_eq!(run.stamina, 10);
    assert_eq!(run.max_stamina, 10);
    assert_eq!(run.current_floor, 0);
    assert_eq!(run.floors[4].floor_type, FloorType::Boss);
    assert!(run.floors[..4]
        .iter()
        .all(|f| f.floor_type != FloorType::Boss));
    assert!(run
        .floors
        .iter()
        .all(|f| (f.floor_type == FloorType::Event) == f.event.is_some()));
}

#[test]
fn test_same_seed_same_layout() {
    let layout = |seed| {
        let mut session = seeded(seed);
        let run = session.generate_gate(Biome::FrostCave, 8).unwrap();
        run.floors.iter().map(|f| f.floor_type).collect::<Vec<_>>()
    };
    assert_eq!(layout(77), layout(77));
}

#[test]
fn test_full_run_credits_rewards_and_resumes_combat() {
    let mut session = seeded(21);
    session.generate_gate(Biome::ShadowCrypt, 5).unwrap();
    assert!(!session.is_timer_live(&TimerId::CombatLoop));

    // Combat is paused while the run is open
    let wave = session.state().wave;
    session.advance(Duration::from_secs(10)).unwrap();
    assert_eq!(session.state().wave, wave);

    let gems_before = session.state().ledger.balance(Currency::Gems);
    play_out(&mut session);

    let result = session
        .state()
        .last_gate_result
        .clone()
        .expect("finished run is recorded");
    assert!(session.state().gate.is_none());
    assert!(result.floors_cleared <= 5);
    assert_eq!(
        session.state().ledger.balance(Currency::Gems),
        gems_before + result.rewards.gems
    );
    if result.outcome == GateOutcome::Completed {
        assert_eq!(result.floors_cleared, 5);
        assert_eq!(
            session.notification(),
            Some("Shadow Crypt (Depth 5) cleared!")
        );
    }

    // Combat resumes on the normal period
    assert!(session.is_timer_live(&TimerId::CombatLoop));
    session.advance(Duration::from_secs(2)).unwrap();
    assert_eq!(session.state().wave, wave + 1);
}

#[test]
fn test_escape_keeps_loot() {
    let mut session = seeded(4);
    session.generate_gate(Biome::FrostCave, 3).unwrap();
    let mana_before = session.state().ledger.balance(Currency::Mana);

    if session.state().gate.as_ref().map(|r| r.status) != Some(GateStatus::Event) {
        session.advance_floor().unwrap();
    }
    let gathered = session
        .state()
        .gate
        .as_ref()
        .map(|r| r.rewards)
        .unwrap_or_default();

    let result = session.escape_gate().unwrap();
    assert_eq!(result.outcome, GateOutcome::Escaped);
    assert!(result.is_success());
    assert_eq!(result.rewards, gathered);
    assert_eq!(
        session.state().ledger.balance(Currency::Mana),
        mana_before + gathered.mana
    );
    assert_eq!(
        session.notification(),
        Some("Escaped Frost Cave (Depth 3) with the loot.")
    );
}

#[test]
fn test_gate_rejections() {
    let mut session = seeded(1);
    assert_eq!(
        session.generate_gate(Biome::ShadowCrypt, 0).unwrap_err(),
        ActionError::InvalidDepth(0)
    );
    assert_eq!(session.advance_floor().unwrap_err(), ActionError::NoActiveRun);
    assert_eq!(session.escape_gate().unwrap_err(), ActionError::NoActiveRun);
    assert_eq!(session.resolve_event(0).unwrap_err(), ActionError::NoActiveRun);

    session.generate_gate(Biome::ShadowCrypt, 2).unwrap();
    assert_eq!(
        session.generate_gate(Biome::FrostCave, 2).unwrap_err(),
        ActionError::RunAlreadyActive
    );
    assert!(!session.is_timer_live(&TimerId::CombatLoop));
}
