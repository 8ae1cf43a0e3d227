//! Player experience and quest payouts shared by ticks and actions.

use super::events::GameEvent;
use super::game_state::GameState;
use crate::character::skills::skill_definition;
use crate::ledger::{format_magnitude, Currency};
use crate::quests::QuestReward;
use tracing::{info, warn};

/// Pushes a `QuestCompleted` event per title.
pub fn report_completed(titles: Vec<String>, events: &mut Vec<GameEvent>) {
    for title in titles {
        info!(quest = %title, "quest completed");
        events.push(GameEvent::QuestCompleted { title });
    }
}

/// Grants raw experience to the player. Every level gained is reported and
/// re-checks Locked quests against the new level.
pub fn grant_player_experience(state: &mut GameState, xp: u64, events: &mut Vec<GameEvent>) {
    let start_level = state.player.level;
    let gained = state.player.grant_experience(xp);
    for level in start_level + 1..=start_level + gained {
        info!(level, "player leveled up");
        events.push(GameEvent::PlayerLeveledUp { level });
        for title in state.quests.unlock_for_level(level) {
            events.push(GameEvent::QuestUnlocked { title });
        }
    }
}

/// Pays out a quest reward bundle and returns the summary line
/// (`"Rewards: 10.00K Mana, 1x Dungeon Key"`).
///
/// Reward items missing from the inventory are skipped with a warning.
pub fn apply_quest_reward(state: &mut GameState, reward: &QuestReward) -> String {
    let mut parts = Vec::new();

    if reward.mana > 0 {
        state.ledger.credit(Currency::Mana, reward.mana);
        parts.push(format!("{} Mana", format_magnitude(reward.mana as f64)));
    }
    if reward.gems > 0 {
        state.ledger.credit(Currency::Gems, reward.gems);
        parts.push(format!("{} Gems", reward.gems));
    }
    if reward.shadow_essence > 0 {
        state
            .ledger
            .credit(Currency::ShadowEssence, reward.shadow_essence);
        parts.push(format!("{} Essence", reward.shadow_essence));
    }
    for grant in &reward.items {
        match state.inventory.add_item(grant.id, grant.quantity) {
            Ok(item) => parts.push(format!("{}x {}", grant.quantity, item.name)),
            Err(err) => warn!(item = grant.id, %err, "reward item skipped"),
        }
    }
    if let Some(artifact) = &reward.artifact {
        parts.push(artifact.name.clone());
        state.inventory.add_artifact(artifact.clone());
    }
    if let Some(skill_id) = &reward.skill {
        match skill_definition(skill_id) {
            Some(skill) => {
                parts.push(format!("New Skill: {}", skill.name));
                if !state.skills.iter().any(|s| s.id == skill.id) {
                    state.skills.push(skill);
                }
            }
            None => warn!(skill = %skill_id, "reward skill unknown"),
        }
    }

    if parts.is_empty() {
        "Rewards:".to_string()
    } else {
        format!("Rewards: {}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::inventory::{Artifact, BonusType, ItemGrant};
    use crate::quests::QuestStatus;

    #[test]
    fn test_multi_level_grant() {
        let mut state = GameState::new(&GameConfig::fresh());
        let mut events = Vec::new();
        // 250 + 375 covers two levels
        grant_player_experience(&mut state, 700, &mut events);
        assert_eq!(state.player.level, 3);
        assert_eq!(state.player.experience, 75);
        assert_eq!(state.player.skill_points, 2);
        let levels: Vec<u32> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::PlayerLeveledUp { level } => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(levels, vec![2, 3]);
    }

    #[test]
    fn test_level_up_unlocks_quests() {
        let mut state = GameState::new(&GameConfig::fresh());
        state.player.level = 4;
        state.player.experience_to_next_level = 10;
        let mut events = Vec::new();
        grant_player_experience(&mut state, 10, &mut events);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::QuestUnlocked { .. })));
        assert!(state.quests.count(QuestStatus::Available) >= 3);
    }

    #[test]
    fn test_reward_summary() {
        let mut state = GameState::new(&GameConfig::fresh());
        let reward = QuestReward {
            mana: 10_000,
            gems: 50,
            items: vec![
                ItemGrant { id: 1, quantity: 1 },
                ItemGrant { id: 99, quantity: 4 },
            ],
            artifact: Some(Artifact::new(
                12,
                "Heart of the Dungeon",
                "💖",
                "+25% Shadow Essence",
                0.25,
                BonusType::Essence,
            )),
            skill: Some("mana_overload".to_string()),
            ..Default::default()
        };
        let summary = apply_quest_reward(&mut state, &reward);
        assert_eq!(
            summary,
            "Rewards: 10.00K Mana, 50 Gems, 1x Dungeon Key, Heart of the Dungeon, New Skill: Mana Overload"
        );
        assert_eq!(state.ledger.balance(Currency::Mana), 11_000);
        assert_eq!(state.inventory.item(1).map(|i| i.quantity), Some(6));
        assert!(state.skills.iter().any(|s| s.id == "mana_overload"));
        assert!((state.essence_bonus() - 0.0).abs() < 1e-9);
    }
}
