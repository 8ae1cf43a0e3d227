//! Per-run statistics accumulated from session events.

use crate::core::GameEvent;
use crate::gates::GateOutcome;
use crate::ledger::Currency;
use crate::Session;
use serde::Serialize;

/// Everything measured about one simulated session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub final_zone: u32,
    pub final_wave: u32,
    pub final_level: u32,
    pub ascensions: u32,

    pub waves_cleared: u64,
    pub zones_advanced: u64,
    pub unit_level_ups: u64,
    pub mana_from_waves: u64,
    pub mana_from_clicks: u64,

    pub final_mana: u64,
    pub final_gems: u64,
    pub final_essence: u64,

    pub quests_completed: u32,
    pub quests_claimed: u32,
    pub dungeons_claimed: u32,
    pub skills_used: u64,

    pub raid_damage: u64,
    pub raid_rank: u32,
    pub raid_boss_defeated: bool,

    pub gates_cleared: u32,
    pub gates_escaped: u32,
    pub gates_failed: u32,
    pub gate_mana: u64,

    /// Virtual second of each ascension
    pub ascension_seconds: Vec<u64>,
}

impl RunStats {
    /// Folds one event into the counters.
    pub fn record(&mut self, event: &GameEvent, second: u64) {
        match event {
            GameEvent::WaveCleared { mana, .. } => {
                self.waves_cleared += 1;
                self.mana_from_waves += mana;
            }
            GameEvent::ZoneAdvanced { .. } => self.zones_advanced += 1,
            GameEvent::UnitLeveledUp { .. } => self.unit_level_ups += 1,
            GameEvent::ManaClicked { amount } => self.mana_from_clicks += amount,
            GameEvent::QuestCompleted { .. } => self.quests_completed += 1,
            GameEvent::QuestClaimed { .. } => self.quests_claimed += 1,
            GameEvent::DungeonClaimed { .. } => self.dungeons_claimed += 1,
            GameEvent::SkillActivated { .. } => self.skills_used += 1,
            GameEvent::RaidBossDefeated { .. } => self.raid_boss_defeated = true,
            GameEvent::Ascended { .. } => self.ascension_seconds.push(second),
            GameEvent::GateFinished { result } => {
                match result.outcome {
                    GateOutcome::Completed => self.gates_cleared += 1,
                    GateOutcome::Escaped => self.gates_escaped += 1,
                    GateOutcome::Failed => self.gates_failed += 1,
                }
                self.gate_mana += result.rewards.mana;
            }
            _ => {}
        }
    }

    /// Copies the end-of-run snapshot out of the session.
    pub fn finalize(&mut self, session: &Session) {
        let state = session.state();
        self.final_zone = state.zone;
        self.final_wave = state.wave;
        self.final_level = state.player.level;
        self.ascensions = state.ascension_count;
        self.final_mana = state.ledger.balance(Currency::Mana);
        self.final_gems = state.ledger.balance(Currency::Gems);
        self.final_essence = state.ledger.balance(Currency::ShadowEssence);
        self.raid_damage = state.raid.player_damage();
        self.raid_rank = state.raid.player_rank();
    }

    pub fn gates_run(&self) -> u32 {
        self.gates_cleared + self.gates_escaped + self.gates_failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{GateResult, GateRewards};

    #[test]
    fn test_record_counts_events() {
        let mut stats = RunStats::default();
        stats.record(
            &GameEvent::WaveCleared {
                zone: 1,
                wave: 1,
                mana: 100,
                xp: 50,
            },
            2,
        );
        stats.record(&GameEvent::ZoneAdvanced { zone: 2 }, 20);
        stats.record(
            &GameEvent::GateFinished {
                result: GateResult {
                    name: "Frost Cave (Depth 3)".to_string(),
                    outcome: GateOutcome::Failed,
                    floors_cleared: 2,
                    rewards: GateRewards { mana: 400, gems: 0 },
                },
            },
            30,
        );
        stats.record(
            &GameEvent::Ascended {
                essence: 464,
                points: 3,
            },
            40,
        );

        assert_eq!(stats.waves_cleared, 1);
        assert_eq!(stats.mana_from_waves, 100);
        assert_eq!(stats.zones_advanced, 1);
        assert_eq!(stats.gates_failed, 1);
        assert_eq!(stats.gates_run(), 1);
        assert_eq!(stats.gate_mana, 400);
        assert_eq!(stats.ascension_seconds, vec![40]);
    }
}
