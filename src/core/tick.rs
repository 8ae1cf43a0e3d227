//! The combat wave tick.
//!
//! One call advances exactly one wave: quest watermarks, tier events, the
//! mana and xp payout, unit and player leveling, then the wave cursor. The
//! session calls it from the repeating combat timer and from Shadow Rush.

use super::constants::{
    BOSS_WAVE_REWARD, NORMAL_WAVE_REWARD, WAVES_PER_ZONE, ZONE_BOSS_INTERVAL,
    ZONE_BOSS_WAVE_REWARD,
};
use super::events::GameEvent;
use super::game_state::GameState;
use super::progression::{grant_player_experience, report_completed};
use crate::army::grant_experience;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Encounter tier of the current wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterTier {
    Normal,
    Boss,
    ZoneBoss,
}

impl EncounterTier {
    /// Wave 10 is a boss; wave 10 of every tenth zone is a zone boss.
    pub fn for_position(zone: u32, wave: u32) -> Self {
        if wave == WAVES_PER_ZONE {
            if zone % ZONE_BOSS_INTERVAL == 0 {
                EncounterTier::ZoneBoss
            } else {
                EncounterTier::Boss
            }
        } else {
            EncounterTier::Normal
        }
    }

    /// Base mana and raw xp per zone.
    pub fn reward_per_zone(&self) -> (u64, u64) {
        match self {
            EncounterTier::Normal => NORMAL_WAVE_REWARD,
            EncounterTier::Boss => BOSS_WAVE_REWARD,
            EncounterTier::ZoneBoss => ZONE_BOSS_WAVE_REWARD,
        }
    }

    /// Quest objectives this tier advances by one.
    pub fn quest_events(&self) -> &'static [&'static str] {
        match self {
            EncounterTier::ZoneBoss => &[
                "close_rift",
                "rescue_brother",
                "defeat_monarch_shadow",
                "purify_source",
                "defeat_juvenile_dragon",
                "defeat_dungeon_guardian",
                "defeat_dark_self",
                "defeat_7_shadows",
            ],
            EncounterTier::Boss => &[
                "defeat_racketteurs",
                "defeat_corrupted_knight",
                "survive_waves",
                "defeat_golem",
            ],
            EncounterTier::Normal => &[
                "explore_sewers",
                "extract_remains",
                "collect_ore",
                "find_lost_shadows",
            ],
        }
    }
}

/// What one wave paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveOutcome {
    pub tier: EncounterTier,
    pub mana: u64,
    pub xp: u64,
    pub zone_advanced: bool,
}

/// Processes one wave.
///
/// # Arguments
/// - `state` — The game state to advance
/// - `rushed` — True when Shadow Rush forced this wave
/// - `events` — Receives everything that happened, in order
pub fn wave_tick(state: &mut GameState, rushed: bool, events: &mut Vec<GameEvent>) -> WaveOutcome {
    // ── 1. Zone watermarks use the zone before this wave ────────
    let completed = state.quests.sync_zone_watermarks(state.zone);
    report_completed(completed, events);

    // ── 2. Tier quest events ────────────────────────────────────
    let tier = EncounterTier::for_position(state.zone, state.wave);
    for objective in tier.quest_events() {
        let completed = state.quests.update_progress(objective, 1);
        report_completed(completed, events);
    }

    // ── 3. Mana through the gain formula ────────────────────────
    let (mana_per_zone, xp_per_zone) = tier.reward_per_zone();
    let zone = state.zone as u64;
    let mana = state.gain_mana(mana_per_zone * zone);
    let xp = xp_per_zone * zone;
    events.push(GameEvent::WaveCleared {
        zone: state.zone,
        wave: state.wave,
        mana,
        xp,
    });

    // ── 4. Raw xp to every unit ─────────────────────────────────
    for unit in state.army.iter_mut() {
        if grant_experience(unit, xp) > 0 {
            events.push(GameEvent::UnitLeveledUp {
                unit: unit.name.clone(),
                level: unit.level,
            });
        }
    }

    // ── 5. Player leveling and quest unlocks ────────────────────
    grant_player_experience(state, xp, events);

    // ── 6. Wave cursor ──────────────────────────────────────────
    if rushed {
        events.push(GameEvent::WaveRushed { wave: state.wave });
    }
    let zone_advanced = state.wave >= WAVES_PER_ZONE;
    if zone_advanced {
        state.zone += 1;
        state.wave = 1;
        events.push(GameEvent::ZoneAdvanced { zone: state.zone });
    } else {
        state.wave += 1;
    }

    debug!(
        zone = state.zone,
        wave = state.wave,
        ?tier,
        mana,
        xp,
        "wave cleared"
    );
    WaveOutcome {
        tier,
        mana,
        xp,
        zone_advanced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::ledger::Currency;

    fn state_at(zone: u32, wave: u32) -> GameState {
        let mut state = GameState::new(&GameConfig::default());
        state.zone = zone;
        state.wave = wave;
        state
    }

    #[test]
    fn test_tier_for_position() {
        assert_eq!(EncounterTier::for_position(123, 4), EncounterTier::Normal);
        assert_eq!(EncounterTier::for_position(123, 10), EncounterTier::Boss);
        assert_eq!(EncounterTier::for_position(130, 10), EncounterTier::ZoneBoss);
        assert_eq!(EncounterTier::for_position(130, 9), EncounterTier::Normal);
    }

    #[test]
    fn test_normal_wave() {
        let mut state = state_at(123, 4);
        let before = state.ledger.balance(Currency::Mana);
        let mut events = Vec::new();
        let outcome = wave_tick(&mut state, false, &mut events);

        // Crown of the Void: +10%
        assert_eq!(outcome.mana, (12_300.0_f64 * 1.1).floor() as u64);
        assert_eq!(outcome.xp, 6_150);
        assert_eq!(state.ledger.balance(Currency::Mana), before + outcome.mana);
        assert_eq!((state.zone, state.wave), (123, 5));
        assert!(!outcome.zone_advanced);
    }

    #[test]
    fn test_zone_boss_wave_rolls_zone() {
        let mut state = state_at(130, 10);
        let mut events = Vec::new();
        let outcome = wave_tick(&mut state, false, &mut events);
        assert_eq!(outcome.tier, EncounterTier::ZoneBoss);
        assert_eq!(outcome.xp, 130_000);
        assert_eq!((state.zone, state.wave), (131, 1));
        assert!(events.contains(&GameEvent::ZoneAdvanced { zone: 131 }));
    }

    #[test]
    fn test_rush_reports_current_wave() {
        let mut state = state_at(5, 7);
        let mut events = Vec::new();
        wave_tick(&mut state, true, &mut events);
        assert!(events.contains(&GameEvent::WaveRushed { wave: 7 }));
        assert_eq!(state.wave, 8);
    }

    #[test]
    fn test_xp_reaches_every_unit() {
        let mut state = state_at(1, 1);
        let before: Vec<u64> = state.army.iter().map(|u| u.experience).collect();
        let mut events = Vec::new();
        wave_tick(&mut state, false, &mut events);
        for (unit, old) in state.army.iter().zip(before) {
            assert_eq!(unit.experience, old + 50);
        }
    }
}
