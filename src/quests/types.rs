//! Quest data structures.

use crate::inventory::{Artifact, ItemGrant};
use serde::{Deserialize, Serialize};

/// Objectives whose id starts with this prefix track the highest zone
/// reached instead of counting events.
pub const ZONE_OBJECTIVE_PREFIX: &str = "reach_zone";

/// Quest lifecycle. Variants are declared in lifecycle order and a quest
/// only ever moves forward through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuestStatus {
    Locked,
    Available,
    InProgress,
    Completed,
    Claimed,
}

impl QuestStatus {
    pub fn name(&self) -> &'static str {
        match self {
            QuestStatus::Locked => "Locked",
            QuestStatus::Available => "Available",
            QuestStatus::InProgress => "InProgress",
            QuestStatus::Completed => "Completed",
            QuestStatus::Claimed => "Claimed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestCategory {
    Social,
    Exploration,
    Investigation,
    Combat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    pub description: String,
    pub target: u64,
    pub progress: u64,
}

impl Objective {
    pub fn new(id: &str, description: &str, target: u64) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            target,
            progress: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= self.target
    }

    pub fn is_zone_watermark(&self) -> bool {
        self.id.starts_with(ZONE_OBJECTIVE_PREFIX)
    }

    /// Adds to the count, clamped to the target.
    pub fn advance(&mut self, delta: u64) {
        self.progress = self.progress.saturating_add(delta).min(self.target);
    }

    /// Raises the watermark to `value` (clamped to the target). Never lowers it.
    pub fn raise_to(&mut self, value: u64) {
        self.progress = self.progress.max(value.min(self.target));
    }
}

/// Everything a claim pays out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestReward {
    pub mana: u64,
    pub gems: u64,
    pub shadow_essence: u64,
    pub items: Vec<ItemGrant>,
    pub artifact: Option<Artifact>,
    /// Id of an active skill the claim unlocks
    pub skill: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub category: QuestCategory,
    pub level_requirement: u32,
    pub synopsis: String,
    pub reward: QuestReward,
    pub objectives: Vec<Objective>,
    pub status: QuestStatus,
}

impl Quest {
    pub fn objectives_done(&self) -> bool {
        self.objectives.iter().all(Objective::is_complete)
    }

    /// Moves an in-progress quest to Completed once every objective is done.
    /// Returns true on that transition.
    pub fn check_completion(&mut self) -> bool {
        if self.status == QuestStatus::InProgress && self.objectives_done() {
            self.status = QuestStatus::Completed;
            return true;
        }
        false
    }
}
