//! Raid damage, phases, countdown, and rank-tiered rewards.

use super::types::{DamageOutcome, LeaderboardEntry, Raid, RaidBoss, RaidReward, RaidStatus};
use crate::core::constants::{
    RAID_PHASE_COUNT, RAID_PHASE_THREE_THRESHOLD, RAID_PHASE_TWO_THRESHOLD,
    RAID_REWARD_BRACKETS, RAID_REWARD_FALLBACK, RAID_RIVALS,
};
use crate::core::error::ActionError;

pub const RAID_BOSS_ID: &str = "weekly_boss_1";
pub const RAID_BOSS_NAME: &str = "Kamish, the Void Dragon";
pub const PLAYER_ENTRY_NAME: &str = "You";

/// Objective the boss kill advances.
pub const RAID_DEFEAT_OBJECTIVE: &str = "defeat_gatekeeper";

/// Phase implied by the remaining HP fraction alone.
pub fn phase_for_hp(current_hp: u64, total_hp: u64) -> u32 {
    if total_hp == 0 {
        return RAID_PHASE_COUNT;
    }
    let fraction = current_hp as f64 / total_hp as f64;
    if fraction < RAID_PHASE_THREE_THRESHOLD {
        3
    } else if fraction < RAID_PHASE_TWO_THRESHOLD {
        2
    } else {
        1
    }
}

/// Reward bracket for a final leaderboard rank.
pub fn reward_for_rank(rank: u32) -> RaidReward {
    let (shadow_essence, gems) = RAID_REWARD_BRACKETS
        .iter()
        .find(|(max_rank, _, _)| rank <= *max_rank)
        .map(|&(_, essence, gems)| (essence, gems))
        .unwrap_or(RAID_REWARD_FALLBACK);
    RaidReward {
        rank,
        shadow_essence,
        gems,
    }
}

impl Raid {
    /// A fresh raid cycle. Rival damage is seeded from the army's attack so
    /// the leaderboard is competitive at any stage.
    pub fn new(total_hp: u64, duration_secs: u64, army_attack: u64) -> Self {
        let mut leaderboard: Vec<LeaderboardEntry> = RAID_RIVALS
            .iter()
            .map(|&(name, multiple)| LeaderboardEntry {
                rank: 0,
                name: name.to_string(),
                damage: army_attack.saturating_mul(multiple),
                is_player: false,
            })
            .collect();
        // The player opens in third place, between SovereignX and Luna
        leaderboard.insert(
            2,
            LeaderboardEntry {
                rank: 0,
                name: PLAYER_ENTRY_NAME.to_string(),
                damage: 0,
                is_player: true,
            },
        );
        for (index, entry) in leaderboard.iter_mut().enumerate() {
            entry.rank = index as u32 + 1;
        }

        Self {
            boss: RaidBoss {
                id: RAID_BOSS_ID.to_string(),
                name: RAID_BOSS_NAME.to_string(),
                total_hp,
                current_hp: total_hp,
                phases: RAID_PHASE_COUNT,
                current_phase: 1,
                status: RaidStatus::InProgress,
                remaining_secs: duration_secs,
            },
            leaderboard,
            participating: false,
            rewards_claimed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.boss.status == RaidStatus::InProgress
    }

    /// Flips participation. Joining is only possible while the boss is up.
    /// Returns the new flag.
    pub fn toggle_participation(&mut self) -> Result<bool, ActionError> {
        if !self.participating && !self.is_active() {
            return Err(ActionError::wrong_status(self.boss.name.clone(), "in progress"));
        }
        self.participating = !self.participating;
        Ok(self.participating)
    }

    /// Deals one second of damage, credits the player's entry, re-sorts the
    /// leaderboard and advances the phase. Phases never go back.
    pub fn apply_damage(&mut self, damage_per_second: u64) -> DamageOutcome {
        if !self.is_active() {
            self.participating = false;
            return DamageOutcome::default();
        }

        let dealt = damage_per_second.min(self.boss.current_hp);
        self.boss.current_hp -= dealt;
        if let Some(entry) = self.leaderboard.iter_mut().find(|e| e.is_player) {
            entry.damage = entry.damage.saturating_add(damage_per_second);
        }
        self.rerank();

        let mut outcome = DamageOutcome {
            damage: damage_per_second,
            ..Default::default()
        };
        let phase = phase_for_hp(self.boss.current_hp, self.boss.total_hp);
        if phase > self.boss.current_phase {
            self.boss.current_phase = phase;
            outcome.entered_phase = Some(phase);
        }
        if self.boss.current_hp == 0 {
            self.boss.status = RaidStatus::Defeated;
            self.participating = false;
            outcome.defeated = true;
        }
        outcome
    }

    /// Stable sort by damage, highest first; ranks follow position.
    fn rerank(&mut self) {
        self.leaderboard.sort_by(|a, b| b.damage.cmp(&a.damage));
        for (index, entry) in self.leaderboard.iter_mut().enumerate() {
            entry.rank = index as u32 + 1;
        }
    }

    /// One second of the raid countdown. Returns true when the raid just
    /// expired; participation stops at that point.
    pub fn countdown_second(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.boss.remaining_secs = self.boss.remaining_secs.saturating_sub(1);
        if self.boss.remaining_secs == 0 {
            self.boss.status = RaidStatus::Expired;
            self.participating = false;
            return true;
        }
        false
    }

    /// The player's 1-based rank, or one past the last entry if absent.
    pub fn player_rank(&self) -> u32 {
        self.leaderboard
            .iter()
            .find(|e| e.is_player)
            .map(|e| e.rank)
            .unwrap_or(self.leaderboard.len() as u32 + 1)
    }

    pub fn player_damage(&self) -> u64 {
        self.leaderboard
            .iter()
            .find(|e| e.is_player)
            .map(|e| e.damage)
            .unwrap_or(0)
    }

    /// Claims the reward for the player's rank. Only once per cycle, and only
    /// after the boss is no longer in progress.
    pub fn claim_rewards(&mut self) -> Result<RaidReward, ActionError> {
        if self.is_active() {
            return Err(ActionError::wrong_status(self.boss.name.clone(), "finished"));
        }
        if self.rewards_claimed {
            return Err(ActionError::AlreadyClaimed);
        }
        self.rewards_claimed = true;
        Ok(reward_for_rank(self.player_rank()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_raid() -> Raid {
        Raid::new(1_000, 10, 1)
    }

    fn is_sorted_and_ranked(raid: &Raid) -> bool {
        raid.leaderboard
            .windows(2)
            .all(|w| w[0].damage >= w[1].damage)
            && raid
                .leaderboard
                .iter()
                .enumerate()
                .all(|(i, e)| e.rank == i as u32 + 1)
    }

    #[test]
    fn test_initial_leaderboard() {
        let raid = Raid::new(1_000_000_000_000, 604_800, 300_000);
        let names: Vec<&str> = raid.leaderboard.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zephyr", "SovereignX", "You", "Luna", "Goliath"]);
        assert_eq!(raid.leaderboard[0].damage, 4_500_000_000);
        assert_eq!(raid.player_rank(), 3);
        assert_eq!(raid.boss.current_phase, 1);
    }

    #[test]
    fn test_damage_reranks() {
        let mut raid = small_raid();
        raid.toggle_participation().unwrap();
        for _ in 0..3 {
            raid.apply_damage(4);
            assert!(is_sorted_and_ranked(&raid));
        }
        // Rivals: 15000, 12000, 8000, 5000; player 12 sits last
        assert_eq!(raid.player_rank(), 5);
        assert_eq!(raid.player_damage(), 12);
    }

    #[test]
    fn test_phases_are_one_way() {
        let mut raid = small_raid();
        assert_eq!(raid.apply_damage(300).entered_phase, None);
        assert_eq!(raid.apply_damage(100).entered_phase, Some(2));
        assert_eq!(raid.boss.current_phase, 2);
        assert_eq!(raid.apply_damage(300).entered_phase, Some(3));

        // Healing the boss does not bring an earlier phase back
        raid.boss.current_hp = 900;
        assert_eq!(raid.apply_damage(1).entered_phase, None);
        assert_eq!(raid.boss.current_phase, 3);
    }

    #[test]
    fn test_phase_can_jump() {
        let mut raid = small_raid();
        let outcome = raid.apply_damage(800);
        assert_eq!(outcome.entered_phase, Some(3));
    }

    #[test]
    fn test_defeat_stops_participation() {
        let mut raid = small_raid();
        raid.toggle_participation().unwrap();
        let outcome = raid.apply_damage(5_000);
        assert!(outcome.defeated);
        assert_eq!(raid.boss.current_hp, 0);
        assert_eq!(raid.boss.status, RaidStatus::Defeated);
        assert!(!raid.participating);
        assert_eq!(raid.apply_damage(5_000), DamageOutcome::default());
        assert!(raid.toggle_participation().is_err());
    }

    #[test]
    fn test_countdown_expires() {
        let mut raid = small_raid();
        raid.toggle_participation().unwrap();
        for _ in 0..9 {
            assert!(!raid.countdown_second());
        }
        assert!(raid.countdown_second());
        assert_eq!(raid.boss.status, RaidStatus::Expired);
        assert!(!raid.participating);
        assert!(!raid.countdown_second());
    }

    #[test]
    fn test_reward_brackets() {
        assert_eq!(reward_for_rank(1).shadow_essence, 50_000);
        assert_eq!(reward_for_rank(2).gems, 2_500);
        assert_eq!(reward_for_rank(3).gems, 2_500);
        assert_eq!(reward_for_rank(5).shadow_essence, 10_000);
        assert_eq!(reward_for_rank(6).shadow_essence, 5_000);
    }

    #[test]
    fn test_claim_once_after_finish() {
        let mut raid = small_raid();
        assert!(raid.claim_rewards().is_err());
        raid.apply_damage(1_000);
        let reward = raid.claim_rewards().unwrap();
        // 1000 damage trails every rival
        assert_eq!(reward.rank, 5);
        assert_eq!(reward.shadow_essence, 10_000);
        assert_eq!(raid.claim_rewards(), Err(ActionError::AlreadyClaimed));
    }

    #[test]
    fn test_phase_for_hp() {
        assert_eq!(phase_for_hp(1_000, 1_000), 1);
        assert_eq!(phase_for_hp(659, 1_000), 2);
        assert_eq!(phase_for_hp(660, 1_000), 1);
        assert_eq!(phase_for_hp(329, 1_000), 3);
        assert_eq!(phase_for_hp(0, 0), 3);
    }
}
