//! Session configuration.

use super::constants::{
    COMBAT_TICK_MS, MAX_EQUIPPED_ARTIFACTS, NOTIFICATION_WINDOW_MS, RAID_BOSS_HP,
    RAID_DURATION_SECS,
};
use std::time::Duration;

/// Starting profile and timing for a session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub starting_zone: u32,
    pub starting_wave: u32,
    pub starting_mana: u64,
    pub starting_gems: u64,

    pub player_level: u32,
    pub player_experience: u64,
    pub player_experience_to_next_level: u64,
    pub skill_points: u32,

    /// Start the army at level 50 instead of the level 1 roster
    pub veteran_army: bool,

    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,

    /// Period of the combat wave tick
    pub combat_tick: Duration,

    /// How long a notification stays visible
    pub notification_window: Duration,

    pub raid_boss_hp: u64,
    pub raid_duration_secs: u64,
    pub max_equipped_artifacts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::veteran()
    }
}

impl GameConfig {
    /// A mid-game profile: zone 123, level 50, millions of mana banked.
    pub fn veteran() -> Self {
        Self {
            starting_zone: 123,
            starting_wave: 4,
            starting_mana: 5_000_000,
            starting_gems: 25_000,
            player_level: 50,
            player_experience: 15_000,
            player_experience_to_next_level: 25_000,
            skill_points: 10,
            veteran_army: true,
            seed: None,
            combat_tick: Duration::from_millis(COMBAT_TICK_MS),
            notification_window: Duration::from_millis(NOTIFICATION_WINDOW_MS),
            raid_boss_hp: RAID_BOSS_HP,
            raid_duration_secs: RAID_DURATION_SECS,
            max_equipped_artifacts: MAX_EQUIPPED_ARTIFACTS,
        }
    }

    /// The baseline a fresh ascension resets to.
    pub fn fresh() -> Self {
        Self {
            starting_zone: 1,
            starting_wave: 1,
            starting_mana: 1_000,
            starting_gems: 0,
            player_level: 1,
            player_experience: 0,
            player_experience_to_next_level: 250,
            skill_points: 0,
            veteran_army: false,
            ..Self::veteran()
        }
    }

    /// Same profile with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
