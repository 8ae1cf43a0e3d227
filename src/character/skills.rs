//! Active skills and their cooldowns.

use crate::core::error::ActionError;
use serde::{Deserialize, Serialize};

/// What a skill does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SkillEffect {
    /// Multiplies mana-per-click for a while.
    ClickMultiplier { factor: u64, duration_secs: u64 },
    /// Clears the current wave immediately.
    RushWave,
    /// Multiplies every gain-formula payout for a while.
    GainMultiplier { factor: f64, duration_secs: u64 },
    /// Monarch ultimates: announced, no mechanical effect.
    Announce,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cooldown_secs: u64,
    /// Seconds left before the skill is ready again. Holds the full
    /// cooldown while the skill is ready.
    pub cooldown_remaining: u64,
    pub on_cooldown: bool,
    pub effect: SkillEffect,
}

impl ActiveSkill {
    fn new(id: &str, name: &str, description: &str, cooldown_secs: u64, effect: SkillEffect) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            cooldown_secs,
            cooldown_remaining: cooldown_secs,
            on_cooldown: false,
            effect,
        }
    }

    /// Puts the skill on cooldown. Rejected while it is already cooling down.
    pub fn start_cooldown(&mut self) -> Result<(), ActionError> {
        if self.on_cooldown {
            return Err(ActionError::OnCooldown(self.name.clone()));
        }
        self.on_cooldown = true;
        self.cooldown_remaining = self.cooldown_secs;
        Ok(())
    }

    /// One second of cooldown. Returns true when the skill just became ready,
    /// at which point the timer is reloaded to the full cooldown.
    pub fn tick_cooldown(&mut self) -> bool {
        if !self.on_cooldown {
            return false;
        }
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
        if self.cooldown_remaining == 0 {
            self.on_cooldown = false;
            self.cooldown_remaining = self.cooldown_secs;
            return true;
        }
        false
    }

    pub fn is_ultimate(&self) -> bool {
        matches!(self.effect, SkillEffect::Announce)
    }
}

/// Looks up a skill definition by id.
pub fn skill_definition(id: &str) -> Option<ActiveSkill> {
    let skill = match id {
        "frenzy" => ActiveSkill::new(
            id,
            "Frenzy",
            "Boosts mana-per-click for 10s.",
            60,
            SkillEffect::ClickMultiplier {
                factor: 5,
                duration_secs: 10,
            },
        ),
        "shadow_rush" => ActiveSkill::new(
            id,
            "Shadow Rush",
            "Instantly completes the current wave.",
            120,
            SkillEffect::RushWave,
        ),
        "mana_overload" => ActiveSkill::new(
            id,
            "Mana Overload",
            "Doubles all mana gains for 30s.",
            300,
            SkillEffect::GainMultiplier {
                factor: 2.0,
                duration_secs: 30,
            },
        ),
        "march_of_shadows" => ActiveSkill::new(
            id,
            "March of Shadows",
            "For 15s, your army damage is increased by 100%.",
            3_600,
            SkillEffect::Announce,
        ),
        "primordial_roar" => ActiveSkill::new(
            id,
            "Primordial Roar",
            "Instantly deals 1000% of your total army attack as damage.",
            3_600,
            SkillEffect::Announce,
        ),
        "eternal_winter" => ActiveSkill::new(
            id,
            "Eternal Winter",
            "Freezes the current enemy for 10 seconds.",
            3_600,
            SkillEffect::Announce,
        ),
        "void_assault" => ActiveSkill::new(
            id,
            "Void Assault",
            "+200% damage for 10s every 60s.",
            60,
            SkillEffect::Announce,
        ),
        "monarchs_crown" => ActiveSkill::new(
            id,
            "Monarch's Crown",
            "Grants +100% global stats for 30 seconds after defeating a boss.",
            3_600,
            SkillEffect::Announce,
        ),
        _ => return None,
    };
    Some(skill)
}

/// Skills every profile starts with.
pub fn starting_skills() -> Vec<ActiveSkill> {
    ["frenzy", "shadow_rush"]
        .iter()
        .filter_map(|id| skill_definition(id))
        .collect()
}
