//! Narrative quests and their objective state machine.

pub mod data;
pub mod logic;
pub mod types;

pub use data::quest_catalog;
pub use logic::{QuestLog, REFINE_OBJECTIVE};
pub use types::{Objective, Quest, QuestCategory, QuestReward, QuestStatus, ZONE_OBJECTIVE_PREFIX};
