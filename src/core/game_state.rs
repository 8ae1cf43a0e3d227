//! The aggregate game state every operation reads and writes.

use super::config::GameConfig;
use crate::army::{initial_units, total_attack, veteran_units, Unit};
use crate::character::ascension::permanent_mana_bonus;
use crate::character::player::Player;
use crate::character::skill_tree::{initial_skill_trees, SkillTree};
use crate::character::skills::{starting_skills, ActiveSkill};
use crate::core::constants::CLICK_MANA_PER_ZONE;
use crate::dungeons::{dungeon_catalog, TimedDungeon};
use crate::gates::{GateResult, GateRun};
use crate::inventory::{initial_artifacts, initial_items, BonusType, Inventory};
use crate::ledger::{Currency, GainModifiers, Ledger};
use crate::monarchs::{monarch_catalog, MonarchState};
use crate::quests::{quest_catalog, QuestLog};
use crate::raid::Raid;
use serde::{Deserialize, Serialize};

/// Everything a session owns besides its clock and timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ledger: Ledger,
    pub zone: u32,
    pub wave: u32,
    pub player: Player,
    pub army: Vec<Unit>,
    pub skills: Vec<ActiveSkill>,
    pub skill_trees: Vec<SkillTree>,
    pub inventory: Inventory,
    pub quests: QuestLog,
    pub dungeons: Vec<TimedDungeon>,
    pub raid: Raid,
    pub monarchs: MonarchState,
    pub ascension_count: u32,

    /// The active gate run, if any
    pub gate: Option<GateRun>,
    /// Result of the most recently finished gate run
    pub last_gate_result: Option<GateResult>,

    /// Transient click buff (Frenzy)
    pub click_multiplier: u64,
    /// Transient flat gain buff (Mana Overload)
    pub gain_multiplier: f64,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        let army = if config.veteran_army {
            veteran_units()
        } else {
            initial_units()
        };
        let player = Player::from_config(config);
        let raid = Raid::new(
            config.raid_boss_hp,
            config.raid_duration_secs,
            total_attack(&army),
        );
        Self {
            ledger: Ledger::new(config.starting_mana, config.starting_gems),
            zone: config.starting_zone.max(1),
            wave: config.starting_wave.max(1),
            quests: QuestLog::new(quest_catalog(), player.level),
            player,
            army,
            skills: starting_skills(),
            skill_trees: initial_skill_trees(),
            inventory: Inventory::new(
                initial_artifacts(),
                initial_items(),
                config.max_equipped_artifacts,
            ),
            dungeons: dungeon_catalog(),
            raid,
            monarchs: MonarchState::new(monarch_catalog()),
            ascension_count: 0,
            gate: None,
            last_gate_result: None,
            click_multiplier: 1,
            gain_multiplier: 1.0,
        }
    }

    /// Inputs of the gain formula: equipped mana artifacts plus the
    /// permanent ascension bonus, scaled by the transient buff.
    pub fn gain_modifiers(&self) -> GainModifiers {
        GainModifiers {
            percent_bonus: self.inventory.bonus(BonusType::Mana)
                + permanent_mana_bonus(self.ascension_count),
            flat_multiplier: self.gain_multiplier,
        }
    }

    /// Credits mana through the gain formula. Returns the amount credited.
    pub fn gain_mana(&mut self, base: u64) -> u64 {
        let gained = self.gain_modifiers().apply(base as f64);
        self.ledger.credit(Currency::Mana, gained);
        gained
    }

    /// Bonus fraction applied to ascension essence.
    pub fn essence_bonus(&self) -> f64 {
        self.monarchs.essence_bonus() + self.inventory.bonus(BonusType::Essence)
    }

    pub fn total_army_attack(&self) -> u64 {
        total_attack(&self.army)
    }

    /// Mana one manual click yields: `10 * zone * click_multiplier`.
    pub fn click_mana(&self) -> u64 {
        CLICK_MANA_PER_ZONE * self.zone as u64 * self.click_multiplier
    }

    pub fn unit_mut(&mut self, name: &str) -> Option<&mut Unit> {
        self.army.iter_mut().find(|u| u.name == name)
    }

    pub fn skill_mut(&mut self, id: &str) -> Option<&mut ActiveSkill> {
        self.skills.iter_mut().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_veteran_profile() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!((state.zone, state.wave), (123, 4));
        assert_eq!(state.ledger.balance(Currency::Mana), 5_000_000);
        assert_eq!(state.player.level, 50);
        assert!(state.gate.is_none());
        assert_eq!(state.raid.leaderboard.len(), 5);
    }

    #[test]
    fn test_gain_modifiers_sum_sources() {
        let mut state = GameState::new(&GameConfig::fresh());
        // Crown of the Void starts equipped
        let modifiers = state.gain_modifiers();
        assert!((modifiers.percent_bonus - 0.1).abs() < 1e-9);
        assert_eq!(modifiers.flat_multiplier, 1.0);

        state.ascension_count = 2;
        state.gain_multiplier = 2.0;
        assert_eq!(state.gain_mana(1_000), 2_600);
        assert_eq!(state.ledger.balance(Currency::Mana), 3_600);
    }

    #[test]
    fn test_click_mana() {
        let mut state = GameState::new(&GameConfig::default());
        assert_eq!(state.click_mana(), 1_230);
        state.click_multiplier = 5;
        assert_eq!(state.click_mana(), 6_150);
    }
}
