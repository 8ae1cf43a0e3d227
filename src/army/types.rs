//! Army unit data structures.

use crate::ledger::format_magnitude;
use serde::{Deserialize, Serialize};

/// Unit rank, ordered A < S < SS < SSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitRank {
    A,
    S,
    SS,
    SSS,
}

impl UnitRank {
    pub fn name(&self) -> &'static str {
        match self {
            UnitRank::A => "A",
            UnitRank::S => "S",
            UnitRank::SS => "SS",
            UnitRank::SSS => "SSS",
        }
    }
}

/// Speed is a descriptive tier, never scaled by leveling or upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speed {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Speed {
    pub fn label(&self) -> &'static str {
        match self {
            Speed::Low => "Low",
            Speed::Medium => "Medium",
            Speed::High => "High",
            Speed::VeryHigh => "Very High",
        }
    }
}

/// The stats that leveling and upgrades can scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKey {
    Hp,
    Attack,
    Defense,
}

impl StatKey {
    pub const SCALABLE: [StatKey; 3] = [StatKey::Hp, StatKey::Attack, StatKey::Defense];

    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Hp => "HP",
            StatKey::Attack => "Attack",
            StatKey::Defense => "Defense",
        }
    }
}

/// Unit stats, held numerically and already quantized to magnitude precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    pub hp: u64,
    pub attack: u64,
    pub defense: u64,
    pub speed: Speed,
}

impl UnitStats {
    pub fn new(hp: u64, attack: u64, defense: u64, speed: Speed) -> Self {
        Self {
            hp,
            attack,
            defense,
            speed,
        }
    }

    pub fn get(&self, key: StatKey) -> u64 {
        match key {
            StatKey::Hp => self.hp,
            StatKey::Attack => self.attack,
            StatKey::Defense => self.defense,
        }
    }

    pub fn set(&mut self, key: StatKey, value: u64) {
        match key {
            StatKey::Hp => self.hp = value,
            StatKey::Attack => self.attack = value,
            StatKey::Defense => self.defense = value,
        }
    }

    /// Magnitude string for display, e.g. "1.20M".
    pub fn display(&self, key: StatKey) -> String {
        format_magnitude(self.get(key) as f64)
    }
}

/// One percentage clause of an upgrade, e.g. "+25% HP".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonus {
    pub stat: StatKey,
    pub percent: u32,
}

/// One-time purchasable unit upgrade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrade {
    pub name: String,
    pub cost: u64,
    /// Applied in declaration order
    pub bonuses: Vec<StatBonus>,
    pub level_requirement: u32,
    pub purchased: bool,
}

impl Upgrade {
    pub fn new(name: &str, cost: u64, bonuses: &[StatBonus], level_requirement: u32) -> Self {
        Self {
            name: name.to_string(),
            cost,
            bonuses: bonuses.to_vec(),
            level_requirement,
            purchased: false,
        }
    }

    /// Display projection of the bonuses: "+25% HP & +25% Defense".
    pub fn bonus_text(&self) -> String {
        self.bonuses
            .iter()
            .map(|b| format!("+{}% {}", b.percent, b.stat.label()))
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

/// An army member. The name is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub icon: String,
    pub rank: UnitRank,
    pub level: u32,
    pub experience: u64,
    pub experience_to_next_level: u64,
    pub stats: UnitStats,
    pub upgrades: Vec<Upgrade>,
}

/// Army list ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    Name,
    Rank,
    Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(UnitRank::A < UnitRank::S);
        assert!(UnitRank::S < UnitRank::SS);
        assert!(UnitRank::SS < UnitRank::SSS);
    }

    #[test]
    fn test_bonus_text_projection() {
        let upgrade = Upgrade::new(
            "Rank S: AoE Shadow Shield",
            5_000_000,
            &[
                StatBonus {
                    stat: StatKey::Hp,
                    percent: 25,
                },
                StatBonus {
                    stat: StatKey::Defense,
                    percent: 25,
                },
            ],
            100,
        );
        assert_eq!(upgrade.bonus_text(), "+25% HP & +25% Defense");
    }

    #[test]
    fn test_stat_display() {
        let stats = UnitStats::new(1_200_000, 50_000, 150, Speed::Low);
        assert_eq!(stats.display(StatKey::Hp), "1.20M");
        assert_eq!(stats.display(StatKey::Attack), "50.00K");
        assert_eq!(stats.display(StatKey::Defense), "150");
    }
}
