//! Fixed-duration dungeon expeditions.

use crate::ledger::format_magnitude;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DungeonStatus {
    Idle,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    Mana,
    Xp,
    Gems,
}

impl RewardKind {
    pub fn label(&self) -> &'static str {
        match self {
            RewardKind::Mana => "Mana",
            RewardKind::Xp => "XP",
            RewardKind::Gems => "Gems",
        }
    }
}

/// A dungeon pays out exactly one typed reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonReward {
    pub kind: RewardKind,
    pub amount: u64,
}

impl DungeonReward {
    /// Notification text, e.g. "Claimed 5.00M Mana!"
    pub fn claim_message(&self) -> String {
        format!(
            "Claimed {} {}!",
            format_magnitude(self.amount as f64),
            self.kind.label()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedDungeon {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub duration_secs: u64,
    pub remaining_secs: u64,
    pub status: DungeonStatus,
    pub reward: DungeonReward,
}
