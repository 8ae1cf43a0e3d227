//! Quest state machine.
//!
//! Statuses only move forward: `Locked -> Available -> InProgress ->
//! Completed -> Claimed`. Objective progress only increases and is clamped
//! to the objective's target. Completion is checked after every objective
//! change, for in-progress quests only.

use super::types::{Quest, QuestReward, QuestStatus};
use crate::core::error::ActionError;
use crate::ledger::{Currency, Ledger};
use serde::{Deserialize, Serialize};

/// Objective id that the shard-refining action completes.
pub const REFINE_OBJECTIVE: &str = "refine_shards";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestLog {
    pub quests: Vec<Quest>,
}

impl QuestLog {
    /// Builds the log, opening every quest the player's level allows.
    pub fn new(mut quests: Vec<Quest>, player_level: u32) -> Self {
        for quest in &mut quests {
            quest.status = if player_level >= quest.level_requirement {
                QuestStatus::Available
            } else {
                QuestStatus::Locked
            };
        }
        Self { quests }
    }

    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Quest, ActionError> {
        self.quests
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| ActionError::unknown("quest", id))
    }

    pub fn with_status(&self, status: QuestStatus) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(move |q| q.status == status)
    }

    pub fn count(&self, status: QuestStatus) -> usize {
        self.with_status(status).count()
    }

    /// Opens every Locked quest whose requirement `level` meets.
    /// Returns the titles of the quests that opened.
    pub fn unlock_for_level(&mut self, level: u32) -> Vec<String> {
        self.quests
            .iter_mut()
            .filter(|q| q.status == QuestStatus::Locked && level >= q.level_requirement)
            .map(|q| {
                q.status = QuestStatus::Available;
                q.title.clone()
            })
            .collect()
    }

    /// `Available -> InProgress`.
    pub fn start(&mut self, id: &str) -> Result<&Quest, ActionError> {
        let quest = self.get_mut(id)?;
        if quest.status != QuestStatus::Available {
            return Err(ActionError::wrong_status(quest.title.clone(), "available"));
        }
        quest.status = QuestStatus::InProgress;
        Ok(&*quest)
    }

    /// Adds `delta` to every in-progress objective with this id. Unknown ids
    /// are a no-op. Returns the titles of quests that just completed.
    pub fn update_progress(&mut self, objective_id: &str, delta: u64) -> Vec<String> {
        let mut completed = Vec::new();
        for quest in self
            .quests
            .iter_mut()
            .filter(|q| q.status == QuestStatus::InProgress)
        {
            for objective in quest.objectives.iter_mut().filter(|o| o.id == objective_id) {
                objective.advance(delta);
            }
            if quest.check_completion() {
                completed.push(quest.title.clone());
            }
        }
        completed
    }

    /// Raises every in-progress zone watermark objective to `zone`.
    /// Returns the titles of quests that just completed.
    pub fn sync_zone_watermarks(&mut self, zone: u32) -> Vec<String> {
        let mut completed = Vec::new();
        for quest in self
            .quests
            .iter_mut()
            .filter(|q| q.status == QuestStatus::InProgress)
        {
            for objective in quest.objectives.iter_mut().filter(|o| o.is_zone_watermark()) {
                objective.raise_to(zone as u64);
            }
            if quest.check_completion() {
                completed.push(quest.title.clone());
            }
        }
        completed
    }

    /// Spends the refine objective's target in mana to complete it outright.
    /// Returns whether the quest completed as a result.
    pub fn refine_shards(&mut self, quest_id: &str, ledger: &mut Ledger) -> Result<bool, ActionError> {
        let quest = self.get_mut(quest_id)?;
        if quest.status != QuestStatus::InProgress {
            return Err(ActionError::wrong_status(quest.title.clone(), "in progress"));
        }
        let objective = quest
            .objectives
            .iter_mut()
            .find(|o| o.id == REFINE_OBJECTIVE)
            .ok_or_else(|| ActionError::unknown("objective", REFINE_OBJECTIVE))?;
        if objective.is_complete() {
            return Err(ActionError::wrong_status(objective.description.clone(), "pending"));
        }
        if !ledger.debit(Currency::Mana, objective.target) {
            return Err(ActionError::InsufficientFunds {
                currency: Currency::Mana,
                purpose: "refine shards",
            });
        }
        objective.progress = objective.target;
        Ok(quest.check_completion())
    }

    /// `Completed -> Claimed`. Hands back the reward bundle for the caller to
    /// pay out; a quest can only be claimed once.
    pub fn claim(&mut self, id: &str) -> Result<(String, QuestReward), ActionError> {
        let quest = self.get_mut(id)?;
        if quest.status != QuestStatus::Completed {
            return Err(ActionError::wrong_status(quest.title.clone(), "completed"));
        }
        quest.status = QuestStatus::Claimed;
        Ok((quest.title.clone(), quest.reward.clone()))
    }
}
