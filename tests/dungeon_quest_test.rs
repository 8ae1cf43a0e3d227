//! Integration test: Timed dungeons feeding the quest state machine
//!
//! Tests the dungeon lifecycle, claim payouts, the claim-driven quest
//! objectives, shard refining, and the quest claim reward summary.

use monarch::core::{GameEvent, TimerId};
use monarch::dungeons::{DungeonStatus, RewardKind};
use monarch::ledger::Currency;
use monarch::quests::QuestStatus;
use monarch::{ActionError, GameConfig, Session};
use std::time::Duration;

const CRYSTAL_QUEST: &str = "q3_crystal_resonance";

fn run_gold_dungeon(session: &mut Session) {
    session.start_dungeon("gold").unwrap();
    session.advance(Duration::from_secs(3_600)).unwrap();
    session.claim_dungeon("gold").unwrap();
}

fn quest_status(session: &Session, id: &str) -> QuestStatus {
    session.state().quests.get(id).map(|q| q.status).unwrap()
}

#[test]
fn test_dungeon_lifecycle() {
    let mut session = Session::new(GameConfig::veteran().with_seed(6));
    session.start_dungeon("gold").unwrap();
    assert_eq!(session.state().dungeons[0].status, DungeonStatus::InProgress);
    assert_eq!(
        session.start_dungeon("gold").unwrap_err(),
        ActionError::WrongStatus {
            subject: "Gold Dungeon".to_string(),
            expected: "idle",
        }
    );

    session.advance(Duration::from_secs(3_599)).unwrap();
    assert_eq!(session.state().dungeons[0].remaining_secs, 1);
    assert!(session.claim_dungeon("gold").is_err());

    session.advance(Duration::from_secs(1)).unwrap();
    assert_eq!(session.state().dungeons[0].status, DungeonStatus::Completed);
    assert!(!session.is_timer_live(&TimerId::Dungeon("gold".to_string())));

    let mana_before = session.state().ledger.balance(Currency::Mana);
    let reward = session.claim_dungeon("gold").unwrap();
    assert_eq!(reward.kind, RewardKind::Mana);
    assert_eq!(reward.amount, 5_000_000);
    assert_eq!(
        session.state().ledger.balance(Currency::Mana),
        mana_before + 5_000_000
    );
    assert_eq!(session.notification(), Some("Claimed 5.00M Mana!"));

    // Back to Idle with the timer reloaded
    let gold = &session.state().dungeons[0];
    assert_eq!(gold.status, DungeonStatus::Idle);
    assert_eq!(gold.remaining_secs, gold.duration_secs);
    assert!(session.claim_dungeon("gold").is_err());
}

#[test]
fn test_unknown_dungeon() {
    let mut session = Session::new(GameConfig::veteran().with_seed(6));
    assert!(matches!(
        session.start_dungeon("volcano"),
        Err(ActionError::UnknownId { kind: "dungeon", .. })
    ));
}

#[test]
fn test_crystal_resonance_flow() {
    let mut session = Session::new(GameConfig::veteran().with_seed(9));
    assert_eq!(quest_status(&session, CRYSTAL_QUEST), QuestStatus::Available);

    // Claims before the quest starts do not count
    run_gold_dungeon(&mut session);
    session.start_quest(CRYSTAL_QUEST).unwrap();
    assert_eq!(session.notification(), Some("Quest Started: Crystal Resonance"));
    assert_eq!(quest_status(&session, CRYSTAL_QUEST), QuestStatus::InProgress);

    session.refine_shards(CRYSTAL_QUEST).unwrap();
    assert_eq!(session.notification(), Some("Crystal shards refined!"));
    assert_eq!(quest_status(&session, CRYSTAL_QUEST), QuestStatus::InProgress);

    run_gold_dungeon(&mut session);
    run_gold_dungeon(&mut session);
    assert_eq!(quest_status(&session, CRYSTAL_QUEST), QuestStatus::InProgress);
    run_gold_dungeon(&mut session);
    assert_eq!(quest_status(&session, CRYSTAL_QUEST), QuestStatus::Completed);
    assert!(session.take_events().contains(&GameEvent::QuestCompleted {
        title: "Crystal Resonance".to_string()
    }));

    let mana_before = session.state().ledger.balance(Currency::Mana);
    let gems_before = session.state().ledger.balance(Currency::Gems);
    let summary = session.claim_quest(CRYSTAL_QUEST).unwrap();
    assert_eq!(summary, "Rewards: 20.00K Mana, 50 Gems");
    assert_eq!(
        session.notification(),
        Some("Quest Claimed! Rewards: 20.00K Mana, 50 Gems")
    );
    assert_eq!(
        session.state().ledger.balance(Currency::Mana),
        mana_before + 20_000
    );
    assert_eq!(session.state().ledger.balance(Currency::Gems), gems_before + 50);
    assert_eq!(quest_status(&session, CRYSTAL_QUEST), QuestStatus::Claimed);
    assert!(session.claim_quest(CRYSTAL_QUEST).is_err());
}

#[test]
fn test_refine_without_mana_is_shown() {
    let mut session = Session::new(GameConfig::fresh().with_seed(2));
    session.start_quest(CRYSTAL_QUEST).unwrap();

    // A fresh profile holds 1,000 mana against a 50,000 refine
    let err = session.refine_shards(CRYSTAL_QUEST).unwrap_err();
    assert!(matches!(err, ActionError::InsufficientFunds { .. }));
    assert_eq!(
        session.notification(),
        Some("Not enough Mana to refine shards!")
    );
    assert_eq!(session.state().ledger.balance(Currency::Mana), 1_000);
    let quest = session.state().quests.get(CRYSTAL_QUEST).unwrap();
    assert!(quest.objectives.iter().all(|o| o.progress == 0));
}

#[test]
fn test_locked_quest_cannot_start() {
    let mut session = Session::new(GameConfig::fresh().with_seed(2));
    assert_eq!(
        quest_status(&session, "q4_price_of_bread"),
        QuestStatus::Locked
    );
    assert!(session.start_quest("q4_price_of_bread").is_err());
    assert_eq!(
        quest_status(&session, "q4_price_of_bread"),
        QuestStatus::Locked
    );
}
