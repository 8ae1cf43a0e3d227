//! Artifact and item data structures.

use serde::{Deserialize, Serialize};

/// Which quantity an artifact's bonus feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusType {
    Mana,
    Xp,
    Attack,
    Hp,
    Defense,
    Crit,
    Essence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: u32,
    pub name: String,
    pub icon: String,
    /// Display text, e.g. "+10% Mana Gain"
    pub bonus: String,
    pub bonus_value: f64,
    pub bonus_type: BonusType,
    pub equipped: bool,
}

impl Artifact {
    pub fn new(
        id: u32,
        name: &str,
        icon: &str,
        bonus: &str,
        bonus_value: f64,
        bonus_type: BonusType,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            bonus: bonus.to_string(),
            bonus_value,
            bonus_type,
            equipped: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub quantity: u32,
}

/// An item id and quantity, as listed in reward bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGrant {
    pub id: u32,
    pub quantity: u32,
}
