//! Ascension: trade a deep zone for permanent currencies and a reset.

use crate::army::{initial_units, monarch_unit};
use crate::character::player::Player;
use crate::character::skill_tree::initial_skill_trees;
use crate::core::constants::{
    ASCENSION_ESSENCE_EXPONENT, ASCENSION_ESSENCE_OFFSET, ASCENSION_POINTS_ZONE_STEP,
    ASCENSION_RESET_MANA, MIN_ZONE_FOR_ASCENSION, PERMANENT_MANA_BONUS_PER_ASCENSION,
};
use crate::core::error::ActionError;
use crate::core::game_state::GameState;
use crate::ledger::Currency;
use serde::{Deserialize, Serialize};

/// What one ascension pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AscensionReward {
    pub shadow_essence: u64,
    pub sovereign_points: u64,
}

pub fn is_ready(zone: u32) -> bool {
    zone >= MIN_ZONE_FOR_ASCENSION
}

/// Shadow essence for ascending at `zone`
///
/// # Formula
/// `floor(floor((zone - 100 + 10)^1.5) * (1 + bonus))`
pub fn essence_gain(zone: u32, bonus: f64) -> u64 {
    let depth = (zone + ASCENSION_ESSENCE_OFFSET).saturating_sub(MIN_ZONE_FOR_ASCENSION);
    let base = (depth as f64).powf(ASCENSION_ESSENCE_EXPONENT).floor();
    (base * (1.0 + bonus)).floor() as u64
}

/// Sovereign points for ascending at `zone`: one, plus one per 25 zones past 100.
pub fn points_gain(zone: u32) -> u64 {
    (zone.saturating_sub(MIN_ZONE_FOR_ASCENSION) / ASCENSION_POINTS_ZONE_STEP) as u64 + 1
}

/// Permanent mana gain bonus after `ascension_count` ascensions.
pub fn permanent_mana_bonus(ascension_count: u32) -> f64 {
    ascension_count as f64 * PERMANENT_MANA_BONUS_PER_ASCENSION
}

/// Performs an ascension, crediting the permanent currencies and resetting
/// the run-scoped progress
///
/// # Arguments
/// * `state` - The game state to modify
///
/// # Returns
/// The reward paid out, or `NotReadyToAscend` below zone 100
pub fn perform_ascension(state: &mut GameState) -> Result<AscensionReward, ActionError> {
    if !is_ready(state.zone) {
        return Err(ActionError::NotReadyToAscend);
    }

    let reward = AscensionReward {
        shadow_essence: essence_gain(state.zone, state.essence_bonus()),
        sovereign_points: points_gain(state.zone),
    };
    state
        .ledger
        .credit(Currency::ShadowEssence, reward.shadow_essence);
    state
        .ledger
        .credit(Currency::SovereignPoints, reward.sovereign_points);
    state.ascension_count += 1;

    // Run-scoped progress goes back to the start
    state.zone = 1;
    state.wave = 1;
    state.ledger.set(Currency::Mana, ASCENSION_RESET_MANA);
    state.player = Player::fresh();
    state.skill_trees = initial_skill_trees();
    state.army = initial_units();

    // A sworn monarch keeps its unique unit
    if let Some(unit) = state
        .monarchs
        .active()
        .and_then(|monarch| monarch_unit(&monarch.unique_unit))
    {
        state.army.push(unit);
    }

    Ok(reward)
}
