//! Simulation configuration.

use crate::core::GameConfig;
use crate::gates::Biome;

/// Starting profile of every simulated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartProfile {
    /// Zone 123, level 50, the mid-game save
    Veteran,
    /// Zone 1, level 1, the post-ascension baseline
    Fresh,
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Virtual seconds each run lasts
    pub seconds_per_run: u64,

    pub profile: StartProfile,

    /// Start and claim timed dungeons whenever they are ready
    pub run_dungeons: bool,

    /// Join the raid and claim its reward once the boss is finished
    pub join_raid: bool,

    /// Fire Frenzy, Shadow Rush and gain buffs off cooldown
    pub use_skills: bool,

    /// Ascend as soon as the zone allows it
    pub ascend: bool,

    /// Start and claim quests as they become available
    pub run_quests: bool,

    /// Open a gate every this many seconds (None = never)
    pub gate_interval_secs: Option<u64>,
    pub gate_depth: u32,
    pub gate_biome: Biome,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 20,
            seed: None,
            seconds_per_run: 6 * 60 * 60,
            profile: StartProfile::Veteran,
            run_dungeons: true,
            join_raid: true,
            use_skills: true,
            ascend: true,
            run_quests: true,
            gate_interval_secs: Some(15 * 60),
            gate_depth: 5,
            gate_biome: Biome::ShadowCrypt,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a short sanity run
    pub fn quick() -> Self {
        Self {
            num_runs: 5,
            seconds_per_run: 30 * 60,
            ..Default::default()
        }
    }

    /// Climb from zone 1 with no help from dungeons or gates
    pub fn fresh_climb() -> Self {
        Self {
            profile: StartProfile::Fresh,
            run_dungeons: false,
            gate_interval_secs: None,
            ascend: false,
            ..Default::default()
        }
    }

    /// Long runs to measure ascension pacing
    pub fn ascension_test() -> Self {
        Self {
            num_runs: 10,
            seconds_per_run: 3 * 24 * 60 * 60,
            ..Default::default()
        }
    }

    /// Session configuration for one run.
    pub fn game_config(&self, run_idx: u32) -> GameConfig {
        let base = match self.profile {
            StartProfile::Veteran => GameConfig::veteran(),
            StartProfile::Fresh => GameConfig::fresh(),
        };
        match self.seed {
            Some(seed) => base.with_seed(seed.wrapping_add(run_idx as u64)),
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_seeds_are_distinct() {
        let config = SimConfig {
            seed: Some(42),
            ..SimConfig::quick()
        };
        assert_eq!(config.game_config(0).seed, Some(42));
        assert_eq!(config.game_config(3).seed, Some(45));
        assert_eq!(SimConfig::quick().game_config(1).seed, None);
    }

    #[test]
    fn test_fresh_profile() {
        let config = SimConfig::fresh_climb().game_config(0);
        assert_eq!(config.starting_zone, 1);
        assert!(!config.veteran_army);
    }
}
