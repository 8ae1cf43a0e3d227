//! Currency balances and the gain formula.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every currency the ledger tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Mana,
    Gems,
    /// Permanent, earned from ascension and raids
    ShadowEssence,
    /// Permanent, spent on monarch skill trees
    SovereignPoints,
}

impl Currency {
    pub const ALL: [Currency; 4] = [
        Currency::Mana,
        Currency::Gems,
        Currency::ShadowEssence,
        Currency::SovereignPoints,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Mana => "Mana",
            Currency::Gems => "Gems",
            Currency::ShadowEssence => "Shadow Essence",
            Currency::SovereignPoints => "Sovereign Points",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Currency::Mana => "Core currency for most upgrades.",
            Currency::Gems => "Premium currency for rare items.",
            Currency::ShadowEssence => "Earned from Ascensions for permanent bonuses.",
            Currency::SovereignPoints => "Earned from high-level Ascensions for Monarch talents.",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Currency balances. Balances never go negative: every debit is checked
/// against the balance before anything changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    mana: u64,
    gems: u64,
    shadow_essence: u64,
    sovereign_points: u64,
}

impl Ledger {
    pub fn new(mana: u64, gems: u64) -> Self {
        Self {
            mana,
            gems,
            ..Default::default()
        }
    }

    fn slot(&mut self, currency: Currency) -> &mut u64 {
        match currency {
            Currency::Mana => &mut self.mana,
            Currency::Gems => &mut self.gems,
            Currency::ShadowEssence => &mut self.shadow_essence,
            Currency::SovereignPoints => &mut self.sovereign_points,
        }
    }

    pub fn balance(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Mana => self.mana,
            Currency::Gems => self.gems,
            Currency::ShadowEssence => self.shadow_essence,
            Currency::SovereignPoints => self.sovereign_points,
        }
    }

    pub fn can_afford(&self, currency: Currency, amount: u64) -> bool {
        self.balance(currency) >= amount
    }

    pub fn credit(&mut self, currency: Currency, amount: u64) {
        let slot = self.slot(currency);
        *slot = slot.saturating_add(amount);
    }

    /// Removes `amount` if the balance covers it. Returns false and leaves
    /// the balance untouched otherwise.
    pub fn debit(&mut self, currency: Currency, amount: u64) -> bool {
        let slot = self.slot(currency);
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }

    /// Overwrites a balance. Only resets use this.
    pub fn set(&mut self, currency: Currency, amount: u64) {
        *self.slot(currency) = amount;
    }
}

/// Inputs of the gain formula `floor(base * (1 + percent_bonus) * flat_multiplier)`.
///
/// `percent_bonus` is the sum (not the product) of every additive source:
/// equipped mana artifacts and the permanent ascension bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainModifiers {
    pub percent_bonus: f64,
    pub flat_multiplier: f64,
}

impl Default for GainModifiers {
    fn default() -> Self {
        Self {
            percent_bonus: 0.0,
            flat_multiplier: 1.0,
        }
    }
}

impl GainModifiers {
    pub fn apply(&self, base: f64) -> u64 {
        let gained = base * (1.0 + self.percent_bonus) * self.flat_multiplier;
        if gained.is_finite() && gained > 0.0 {
            gained.floor() as u64
        } else {
            0
        }
    }
}
