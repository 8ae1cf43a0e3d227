//! The weekly world raid boss and its locally simulated leaderboard.

pub mod logic;
pub mod types;

pub use logic::{phase_for_hp, reward_for_rank, RAID_DEFEAT_OBJECTIVE};
pub use types::{DamageOutcome, LeaderboardEntry, Raid, RaidBoss, RaidReward, RaidStatus};
