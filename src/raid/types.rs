//! World raid data structures.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaidStatus {
    InProgress,
    Defeated,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidBoss {
    pub id: String,
    pub name: String,
    pub total_hp: u64,
    pub current_hp: u64,
    pub phases: u32,
    /// 1-based, only ever increases
    pub current_phase: u32,
    pub status: RaidStatus,
    pub remaining_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position, recomputed after every damage tick
    pub rank: u32,
    pub name: String,
    pub damage: u64,
    pub is_player: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidReward {
    pub rank: u32,
    pub shadow_essence: u64,
    pub gems: u64,
}

/// What one second of raid damage did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DamageOutcome {
    pub damage: u64,
    /// New phase, if a threshold was crossed
    pub entered_phase: Option<u32>,
    pub defeated: bool,
}

/// The singleton raid of the current cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raid {
    pub boss: RaidBoss,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub participating: bool,
    pub rewards_claimed: bool,
}
