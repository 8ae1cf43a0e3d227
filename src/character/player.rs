//! The player avatar: level, experience, and rank.

use crate::army::logic::grow_threshold;
use crate::core::config::GameConfig;
use crate::core::constants::{
    PLAYER_ATTACK_PER_LEVEL, PLAYER_DEFENSE_PER_LEVEL, PLAYER_HP_PER_LEVEL,
    PLAYER_RANK_BREAKPOINTS, PLAYER_XP_GROWTH, SKILL_POINTS_PER_LEVEL,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hunter rank, derived from level alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerRank {
    E,
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

impl PlayerRank {
    const ORDER: [PlayerRank; 8] = [
        PlayerRank::E,
        PlayerRank::D,
        PlayerRank::C,
        PlayerRank::B,
        PlayerRank::A,
        PlayerRank::S,
        PlayerRank::SS,
        PlayerRank::SSS,
    ];

    pub fn for_level(level: u32) -> Self {
        let reached = PLAYER_RANK_BREAKPOINTS
            .iter()
            .filter(|&&breakpoint| level >= breakpoint)
            .count();
        Self::ORDER[reached]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerRank::E => "E",
            PlayerRank::D => "D",
            PlayerRank::C => "C",
            PlayerRank::B => "B",
            PlayerRank::A => "A",
            PlayerRank::S => "S",
            PlayerRank::SS => "SS",
            PlayerRank::SSS => "SSS",
        }
    }
}

impl fmt::Display for PlayerRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub level: u32,
    pub experience: u64,
    pub experience_to_next_level: u64,
    pub skill_points: u32,
}

impl Player {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            level: config.player_level,
            experience: config.player_experience,
            experience_to_next_level: config.player_experience_to_next_level.max(1),
            skill_points: config.skill_points,
        }
    }

    /// The level 1 avatar an ascension resets to.
    pub fn fresh() -> Self {
        Self::from_config(&GameConfig::fresh())
    }

    pub fn rank(&self) -> PlayerRank {
        PlayerRank::for_level(self.level)
    }

    pub fn hp(&self) -> u64 {
        self.level as u64 * PLAYER_HP_PER_LEVEL
    }

    pub fn attack(&self) -> u64 {
        self.level as u64 * PLAYER_ATTACK_PER_LEVEL
    }

    pub fn defense(&self) -> u64 {
        self.level as u64 * PLAYER_DEFENSE_PER_LEVEL
    }

    /// Adds raw experience and levels up while it covers the threshold.
    /// Each level grows the threshold by x1.5 and awards a skill point.
    /// Returns the number of levels gained.
    pub fn grant_experience(&mut self, xp: u64) -> u32 {
        self.experience = self.experience.saturating_add(xp);
        let mut gained = 0;
        while self.experience >= self.experience_to_next_level {
            self.experience -= self.experience_to_next_level;
            self.level = self.level.saturating_add(1);
            self.experience_to_next_level =
                grow_threshold(self.experience_to_next_level, PLAYER_XP_GROWTH);
            self.skill_points = self.skill_points.saturating_add(SKILL_POINTS_PER_LEVEL);
            gained += 1;
        }
        gained
    }
}
