//! Integration test: World raid through a session
//!
//! Tests participation, per-second damage, phase transitions, the boss kill,
//! leaderboard ranking and the once-per-cycle reward claim.

use monarch::core::{GameEvent, TimerId};
use monarch::ledger::Currency;
use monarch::{ActionError, GameConfig, Session};
use std::time::Duration;

/// A veteran session whose boss dies to four seconds of army damage.
fn short_raid() -> Session {
    let attack = Session::new(GameConfig::veteran()).state().total_army_attack();
    Session::new(GameConfig {
        raid_boss_hp: attack * 4,
        ..GameConfig::veteran().with_seed(8)
    })
}

#[test]
fn test_initial_leaderboard() {
    let session = Session::new(GameConfig::veteran().with_seed(1));
    let raid = &session.state().raid;

    assert_eq!(raid.leaderboard.len(), 5);
    assert_eq!(raid.player_rank(), 3);
    assert_eq!(raid.player_damage(), 0);
    assert_eq!(raid.boss.name, "Kamish, the Void Dragon");
    assert_eq!(raid.boss.current_phase, 1);
    assert!(raid.is_active());
    assert!(!raid.participating);
}

#[test]
fn test_damage_only_while_participating() {
    let mut session = short_raid();
    session.advance(Duration::from_secs(3)).unwrap();
    assert_eq!(session.state().raid.player_damage(), 0);
    assert!(!session.is_timer_live(&TimerId::RaidDamage));

    assert!(session.toggle_raid().unwrap());
    assert!(session.is_timer_live(&TimerId::RaidDamage));
    session.advance(Duration::from_secs(1)).unwrap();
    let attack = session.state().total_army_attack();
    assert_eq!(session.state().raid.player_damage(), attack);

    // Rivals seeded from army attack still outrank one second of damage
    assert_eq!(session.state().raid.player_rank(), 5);
}

#[test]
fn test_phases_and_defeat() {
    let mut session = short_raid();
    session.toggle_raid().unwrap();
    session.take_events();

    session.advance(Duration::from_secs(4)).unwrap();

    let events = session.take_events();
    let phases: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::RaidPhaseEntered { phase, .. } => Some(*phase),
            _ => None,
        })
        .collect();
    assert_eq!(phases, vec![2, 3]);
    assert!(events.contains(&GameEvent::RaidBossDefeated {
        boss: "Kamish, the Void Dragon".to_string()
    }));

    let raid = &session.state().raid;
    assert_eq!(raid.boss.current_hp, 0);
    assert!(!raid.is_active());
    assert!(!raid.participating);
    assert!(!session.is_timer_live(&TimerId::RaidDamage));
    assert!(!session.is_timer_live(&TimerId::RaidCountdown));
    assert_eq!(
        session.notification(),
        Some("Kamish, the Void Dragon has been defeated!")
    );

    // A finished raid cannot be joined again
    assert!(session.toggle_raid().is_err());
}

#[test]
fn test_reward_claim_once_after_finish() {
    let mut session = short_raid();
    session.toggle_raid().unwrap();

    // Not claimable while the boss is up
    assert!(matches!(
        session.claim_raid_rewards(),
        Err(ActionError::WrongStatus { .. })
    ));

    session.advance(Duration::from_secs(4)).unwrap();
    let essence_before = session.state().ledger.balance(Currency::ShadowEssence);
    let gems_before = session.state().ledger.balance(Currency::Gems);

    let reward = session.claim_raid_rewards().unwrap();
    assert_eq!(reward.rank, 5);
    assert_eq!(reward.shadow_essence, 10_000);
    assert_eq!(reward.gems, 1_000);
    assert_eq!(
        session.state().ledger.balance(Currency::ShadowEssence),
        essence_before + 10_000
    );
    assert_eq!(
        session.state().ledger.balance(Currency::Gems),
        gems_before + 1_000
    );
    assert_eq!(
        session.notification(),
        Some("Claimed Rank 5 rewards: 10.00K Essence and 1.00K Gems!")
    );

    assert_eq!(
        session.claim_raid_rewards().unwrap_err(),
        ActionError::AlreadyClaimed
    );
}

#[test]
fn test_raid_expires() {
    let mut session = Session::new(GameConfig {
        raid_duration_secs: 5,
        ..GameConfig::veteran().with_seed(2)
    });
    session.toggle_raid().unwrap();
    session.advance(Duration::from_secs(5)).unwrap();

    assert!(!session.state().raid.is_active());
    assert!(session.take_events().contains(&GameEvent::RaidEnded));
    assert!(!session.is_timer_live(&TimerId::RaidCountdown));
    assert!(!session.is_timer_live(&TimerId::RaidDamage));
}
