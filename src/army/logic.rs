//! Unit leveling, upgrades, and roster views.

use super::types::{SortBy, SortDirection, StatKey, Unit};
use crate::core::constants::{UNIT_STAT_GROWTH, UNIT_XP_GROWTH};
use crate::core::error::ActionError;
use crate::ledger::{quantize, Currency, Ledger};

/// Scales a stat by `factor`, floors, and quantizes to magnitude precision.
pub fn scale_stat(value: u64, factor: f64) -> u64 {
    quantize((value as f64 * factor).floor())
}

/// Grows an experience threshold by `factor`, floored.
/// The result is always strictly larger, so small thresholds still grow.
pub fn grow_threshold(threshold: u64, factor: f64) -> u64 {
    ((threshold as f64 * factor).floor() as u64).max(threshold.saturating_add(1))
}

/// Levels the unit while its experience covers the threshold.
/// Returns the number of levels gained.
pub fn level_up(unit: &mut Unit) -> u32 {
    let mut gained = 0;
    while unit.experience >= unit.experience_to_next_level {
        unit.experience -= unit.experience_to_next_level;
        unit.level = unit.level.saturating_add(1);
        unit.experience_to_next_level = grow_threshold(unit.experience_to_next_level, UNIT_XP_GROWTH);
        for key in StatKey::SCALABLE {
            let grown = scale_stat(unit.stats.get(key), UNIT_STAT_GROWTH);
            unit.stats.set(key, grown);
        }
        gained += 1;
    }
    gained
}

/// Adds raw experience and runs the leveling loop.
pub fn grant_experience(unit: &mut Unit, xp: u64) -> u32 {
    unit.experience = unit.experience.saturating_add(xp);
    level_up(unit)
}

/// Checks every purchase precondition without changing anything.
pub fn check_upgrade(unit: &Unit, index: usize, ledger: &Ledger) -> Result<(), ActionError> {
    let upgrade = unit
        .upgrades
        .get(index)
        .ok_or_else(|| ActionError::unknown("upgrade", format!("{}#{}", unit.name, index)))?;
    if upgrade.purchased {
        return Err(ActionError::AlreadyPurchased(upgrade.name.clone()));
    }
    if !ledger.can_afford(Currency::Mana, upgrade.cost) {
        return Err(ActionError::InsufficientFunds {
            currency: Currency::Mana,
            purpose: "purchase this upgrade",
        });
    }
    if unit.level < upgrade.level_requirement {
        return Err(ActionError::LevelTooLow {
            required: upgrade.level_requirement,
        });
    }
    Ok(())
}

/// Purchases an upgrade: debits its cost, marks it purchased, and scales
/// each listed stat in declaration order. Flooring happens per clause, so a
/// stat named twice compounds on the already-floored value.
pub fn apply_upgrade(unit: &mut Unit, index: usize, ledger: &mut Ledger) -> Result<(), ActionError> {
    check_upgrade(unit, index, ledger)?;
    let upgrade = &mut unit.upgrades[index];
    if !ledger.debit(Currency::Mana, upgrade.cost) {
        return Err(ActionError::InsufficientFunds {
            currency: Currency::Mana,
            purpose: "purchase this upgrade",
        });
    }
    upgrade.purchased = true;
    for bonus in upgrade.bonuses.clone() {
        let factor = 1.0 + bonus.percent as f64 / 100.0;
        let scaled = scale_stat(unit.stats.get(bonus.stat), factor);
        unit.stats.set(bonus.stat, scaled);
    }
    Ok(())
}

/// Sum of every unit's attack; this is the raid damage per second.
pub fn total_attack(units: &[Unit]) -> u64 {
    units.iter().map(|u| u.stats.attack).sum()
}

/// Units whose name contains `term` (case-insensitive), sorted.
pub fn filter_and_sort<'a>(
    units: &'a [Unit],
    term: &str,
    by: SortBy,
    direction: SortDirection,
) -> Vec<&'a Unit> {
    let term = term.to_lowercase();
    let mut filtered: Vec<&Unit> = units
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&term))
        .collect();
    filtered.sort_by(|a, b| {
        let ordering = match by {
            SortBy::Name => a.name.cmp(&b.name),
            SortBy::Rank => a.rank.cmp(&b.rank),
            SortBy::Level => a.level.cmp(&b.level),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    filtered
}

/// Default direction when switching to a sort key: names ascend, the rest descend.
pub fn default_direction(by: SortBy) -> SortDirection {
    match by {
        SortBy::Name => SortDirection::Ascending,
        SortBy::Rank | SortBy::Level => SortDirection::Descending,
    }
}
