//! Integration test: Session timers, notifications and teardown
//!
//! Tests that every periodic activity is a scheduler timer, that the
//! notification slot clears after its window, that rejected actions change
//! nothing, and that shutdown leaves no live timer behind.

use monarch::core::{GameEvent, TimerId};
use monarch::gates::Biome;
use monarch::ledger::Currency;
use monarch::{ActionError, GameConfig, Session};
use std::time::Duration;

#[test]
fn test_new_session_timers() {
    let session = Session::new(GameConfig::veteran().with_seed(1));
    assert_eq!(session.live_timers(), 2);
    assert!(session.is_timer_live(&TimerId::CombatLoop));
    assert!(session.is_timer_live(&TimerId::RaidCountdown));
    assert_eq!(session.now(), Duration::ZERO);
    assert_eq!(session.notification(), None);
}

#[test]
fn test_notification_window_restarts() {
    let mut session = Session::new(GameConfig::fresh().with_seed(1));
    session.start_quest("q3_crystal_resonance").unwrap();
    session.advance(Duration::from_secs(2)).unwrap();

    // A newer notification replaces the old one and restarts the window
    session.activate_skill("frenzy").unwrap();
    assert_eq!(session.notification(), Some("Frenzy activated!"));
    session.advance(Duration::from_millis(2_500)).unwrap();
    assert_eq!(session.notification(), Some("Frenzy activated!"));
    session.advance(Duration::from_millis(500)).unwrap();
    assert_eq!(session.notification(), None);
}

#[test]
fn test_custom_notification_window() {
    let mut session = Session::new(GameConfig {
        notification_window: Duration::from_secs(1),
        ..GameConfig::veteran().with_seed(1)
    });
    session.activate_skill("frenzy").unwrap();
    session.advance(Duration::from_secs(1)).unwrap();
    assert_eq!(session.notification(), None);
}

#[test]
fn test_rejections_change_nothing() {
    let mut session = Session::new(GameConfig::fresh().with_seed(4));
    let mana = session.state().ledger.balance(Currency::Mana);

    // 100,000 mana upgrade on a 1,000 mana profile
    assert!(matches!(
        session.purchase_upgrade("Infantry", 0),
        Err(ActionError::InsufficientFunds { .. })
    ));
    assert!(!session.state().army[0].upgrades[0].purchased);
    assert_eq!(session.state().ledger.balance(Currency::Mana), mana);

    assert_eq!(
        session.purchase_skill_node("w1").unwrap_err(),
        ActionError::NoSkillPoints
    );
    assert!(matches!(
        session.activate_skill("eternal_winter"),
        Err(ActionError::UnknownId { kind: "skill", .. })
    ));

    // Silent rejections leave the notification slot alone
    assert_eq!(session.notification(), None);
    assert!(session
        .take_events()
        .iter()
        .all(|e| !matches!(e, GameEvent::ActionRejected { .. })));
}

#[test]
fn test_artifact_cap_is_shown() {
    let mut session = Session::new(GameConfig {
        max_equipped_artifacts: 1,
        ..GameConfig::veteran().with_seed(4)
    });
    assert_eq!(
        session.toggle_artifact(2).unwrap_err(),
        ActionError::ArtifactCapReached(1)
    );
    assert_eq!(session.notification(), Some("Max artifacts equipped (1)"));

    // Unequipping the crown frees the slot
    assert!(!session.toggle_artifact(1).unwrap());
    assert!(session.toggle_artifact(2).unwrap());
}

#[test]
fn test_shutdown_tears_down_every_timer() {
    let mut session = Session::new(GameConfig::veteran().with_seed(5));
    session.start_dungeon("gold").unwrap();
    session.start_dungeon("xp").unwrap();
    session.toggle_raid().unwrap();
    session.activate_skill("frenzy").unwrap();
    session.activate_skill("shadow_rush").unwrap();
    session.generate_gate(Biome::ShadowCrypt, 3).unwrap();
    assert!(session.live_timers() > 0);

    let cancelled = session.shutdown();
    assert!(cancelled > 0);
    assert_eq!(session.live_timers(), 0);
    assert!(session.is_closed());

    // Every entry point is rejected afterwards, and nothing moves
    let zone = session.state().zone;
    assert_eq!(
        session.advance(Duration::from_secs(60)).unwrap_err(),
        ActionError::SessionClosed
    );
    assert_eq!(
        session.start_dungeon("boss").unwrap_err(),
        ActionError::SessionClosed
    );
    assert_eq!(session.advance_floor().unwrap_err(), ActionError::SessionClosed);
    assert_eq!(session.ascend().unwrap_err(), ActionError::SessionClosed);
    assert_eq!(session.state().zone, zone);
    assert_eq!(session.now(), Duration::ZERO);
    assert_eq!(session.shutdown(), 0);
}

#[test]
fn test_advance_to_the_end_of_the_clock() {
    let mut session = Session::new(GameConfig {
        raid_duration_secs: 1,
        ..GameConfig::veteran().with_seed(3)
    });

    // Let the raid expire and open a gate so no repeating timer is left
    session.advance(Duration::from_secs(1)).unwrap();
    session.generate_gate(Biome::FrostCave, 3).unwrap();
    assert!(session.live_timers() <= 1);

    session.advance(Duration::MAX).unwrap();
    assert_eq!(session.now(), Duration::MAX);
    session.advance(Duration::from_secs(1)).unwrap();
    assert_eq!(session.now(), Duration::MAX);

    // Combat resumes at the end of the clock, fires once, and is dropped
    session.escape_gate().unwrap();
    session.advance(Duration::from_secs(2)).unwrap();
    assert!(!session.is_timer_live(&TimerId::CombatLoop));
}
