//! Events produced by ticks and player actions.
//!
//! A session keeps a bounded log of these. Some of them also carry a short
//! player-facing notification; the latest one wins the notification slot.

use crate::dungeons::DungeonReward;
use crate::gates::{GateOutcome, GateResult};
use crate::ledger::format_magnitude;
use crate::raid::RaidReward;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    // ── Progression ─────────────────────────────────────────────
    /// A combat wave was cleared and its reward paid.
    WaveCleared {
        zone: u32,
        wave: u32,
        mana: u64,
        xp: u64,
    },
    /// The wave was skipped ahead by Shadow Rush.
    WaveRushed { wave: u32 },
    ZoneAdvanced { zone: u32 },
    PlayerLeveledUp { level: u32 },
    UnitLeveledUp { unit: String, level: u32 },
    ManaClicked { amount: u64 },

    // ── Quests ──────────────────────────────────────────────────
    QuestUnlocked { title: String },
    QuestStarted { title: String },
    QuestCompleted { title: String },
    QuestClaimed { title: String, summary: String },
    ShardsRefined { quest: String },

    // ── Skills ──────────────────────────────────────────────────
    UltimateUnleashed { name: String },
    SkillActivated { name: String },
    SkillReady { name: String },
    BuffExpired { skill: String },
    SkillNodeLearned { name: String, level: u32 },

    // ── Army and inventory ──────────────────────────────────────
    UpgradePurchased { unit: String, upgrade: String },
    ArtifactToggled { name: String, equipped: bool },

    // ── Timed dungeons ──────────────────────────────────────────
    DungeonStarted { name: String },
    DungeonCompleted { name: String },
    DungeonClaimed { name: String, reward: DungeonReward },

    // ── Raid ────────────────────────────────────────────────────
    RaidParticipation { participating: bool },
    RaidPhaseEntered { boss: String, phase: u32 },
    RaidBossDefeated { boss: String },
    RaidEnded,
    RaidRewardsClaimed { reward: RaidReward },

    // ── Monarchs and ascension ──────────────────────────────────
    MonarchSelected { name: String },
    MonarchNodeLearned { name: String },
    Ascended { essence: u64, points: u64 },

    // ── Gates ───────────────────────────────────────────────────
    GateEntered { name: String, depth: usize },
    GateFloorCleared { floor: usize },
    GateEventResolved { text: String },
    GateFinished { result: GateResult },

    /// A rejected action whose reason is shown to the player.
    ActionRejected { message: String },
}

impl GameEvent {
    /// The notification text for this event, if it has one.
    pub fn notification(&self) -> Option<String> {
        let text = match self {
            GameEvent::WaveRushed { wave } => format!("Rushed wave {}!", wave),
            GameEvent::PlayerLeveledUp { level } => format!("You reached Level {}!", level),
            GameEvent::QuestUnlocked { title } => format!("New Quest Available: {}", title),
            GameEvent::QuestStarted { title } => format!("Quest Started: {}", title),
            GameEvent::QuestCompleted { title } => format!("Quest Complete: {}", title),
            GameEvent::QuestClaimed { summary, .. } => format!("Quest Claimed! {}", summary),
            GameEvent::ShardsRefined { .. } => "Crystal shards refined!".to_string(),
            GameEvent::UltimateUnleashed { name } => format!("Ultimate: {}!", name),
            GameEvent::SkillActivated { name } => format!("{} activated!", name),
            GameEvent::DungeonClaimed { reward, .. } => reward.claim_message(),
            GameEvent::RaidPhaseEntered { boss, phase } => {
                format!("{} has entered Phase {}!", boss, phase)
            }
            GameEvent::RaidBossDefeated { boss } => format!("{} has been defeated!", boss),
            GameEvent::RaidEnded => "The Raid has ended!".to_string(),
            GameEvent::RaidRewardsClaimed { reward } => format!(
                "Claimed Rank {} rewards: {} Essence and {} Gems!",
                reward.rank,
                format_magnitude(reward.shadow_essence as f64),
                format_magnitude(reward.gems as f64)
            ),
            GameEvent::MonarchSelected { name } => {
                format!("You have sworn allegiance to the {}!", name)
            }
            GameEvent::Ascended { essence, .. } => {
                format!("Ascended! Gained {} Shadow Essence.", essence)
            }
            GameEvent::GateFinished { result } => match result.outcome {
                GateOutcome::Failed => format!("{} failed. Half of the loot was lost.", result.name),
                GateOutcome::Escaped => format!("Escaped {} with the loot.", result.name),
                GateOutcome::Completed => format!("{} cleared!", result.name),
            },
            GameEvent::ActionRejected { message } => message.clone(),
            _ => return None,
        };
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeons::RewardKind;

    #[test]
    fn test_notification_texts() {
        let phase = GameEvent::RaidPhaseEntered {
            boss: "Kamish, the Void Dragon".to_string(),
            phase: 2,
        };
        assert_eq!(
            phase.notification().unwrap(),
            "Kamish, the Void Dragon has entered Phase 2!"
        );

        let claimed = GameEvent::RaidRewardsClaimed {
            reward: RaidReward {
                rank: 1,
                shadow_essence: 50_000,
                gems: 5_000,
            },
        };
        assert_eq!(
            claimed.notification().unwrap(),
            "Claimed Rank 1 rewards: 50.00K Essence and 5.00K Gems!"
        );

        let dungeon = GameEvent::DungeonClaimed {
            name: "Gold Dungeon".to_string(),
            reward: DungeonReward {
                kind: RewardKind::Mana,
                amount: 1_500_000,
            },
        };
        assert_eq!(dungeon.notification().unwrap(), "Claimed 1.50M Mana!");
    }

    #[test]
    fn test_silent_events() {
        assert!(GameEvent::ZoneAdvanced { zone: 4 }.notification().is_none());
        assert!(GameEvent::SkillReady {
            name: "Frenzy".to_string()
        }
        .notification()
        .is_none());
    }
}
