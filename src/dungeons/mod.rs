//! Timed dungeon expeditions.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{claim_objectives, dungeon_catalog};
pub use types::{DungeonReward, DungeonStatus, RewardKind, TimedDungeon};

/// Objective every dungeon claim advances.
pub const COMPLETE_DUNGEON_OBJECTIVE: &str = "complete_dungeon";
