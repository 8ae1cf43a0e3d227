//! Gate run data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    ShadowCrypt,
    FrostCave,
}

impl Biome {
    pub const ALL: [Biome; 2] = [Biome::ShadowCrypt, Biome::FrostCave];

    pub fn name(&self) -> &'static str {
        match self {
            Biome::ShadowCrypt => "Shadow Crypt",
            Biome::FrostCave => "Frost Cave",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Biome::ShadowCrypt => "💀",
            Biome::FrostCave => "❄️",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Biome::ShadowCrypt => "A dark, eerie place filled with the restless dead.",
            Biome::FrostCave => "A cavern of eternal ice, home to frigid beasts.",
        }
    }

    pub fn enemies(&self) -> &'static [&'static str] {
        match self {
            Biome::ShadowCrypt => &["Skeletal Soldiers", "Ghouls", "Wraiths"],
            Biome::FrostCave => &["Ice Sprites", "Frost Wolves", "Yetis"],
        }
    }

    pub fn event_pool(&self) -> &'static [EventKind] {
        match self {
            Biome::ShadowCrypt => &[EventKind::Tomb, EventKind::ShadowAltar],
            Biome::FrostCave => &[EventKind::FrozenFountain, EventKind::IceScript],
        }
    }

    pub fn boss(&self) -> &'static str {
        match self {
            Biome::ShadowCrypt => "Lich Lord",
            Biome::FrostCave => "Ancient Ice Golem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloorType {
    Combat,
    Treasure,
    Event,
    Boss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateStatus {
    Exploring,
    Event,
    Boss,
    Completed,
    Failed,
}

impl GateStatus {
    /// Status a run takes on when its cursor lands on a floor.
    pub fn for_floor(floor_type: FloorType) -> Self {
        match floor_type {
            FloorType::Event => GateStatus::Event,
            FloorType::Boss => GateStatus::Boss,
            FloorType::Combat | FloorType::Treasure => GateStatus::Exploring,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GateStatus::Completed | GateStatus::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Tomb,
    ShadowAltar,
    FrozenFountain,
    IceScript,
}

/// What picking an option does. Resolved in `events::resolve_option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionAction {
    PryTomb,
    LeaveTomb,
    OfferMana,
    DestroyAltar,
    ThawFountain,
    SmashIce,
    Decipher,
    IgnoreRunes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOption {
    pub label: String,
    pub action: OptionAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateEvent {
    pub kind: EventKind,
    pub description: String,
    pub options: Vec<EventOption>,
}

/// Outcome of one event choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResult {
    pub text: String,
    pub rewards: GateRewards,
    pub stamina_change: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateRewards {
    pub mana: u64,
    pub gems: u64,
}

impl GateRewards {
    pub fn add(&mut self, other: GateRewards) {
        self.mana = self.mana.saturating_add(other.mana);
        self.gems = self.gems.saturating_add(other.gems);
    }

    pub fn halved(&self) -> GateRewards {
        GateRewards {
            mana: self.mana / 2,
            gems: self.gems / 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub floor_type: FloorType,
    pub difficulty: f64,
    pub cleared: bool,
    pub encounter_text: String,
    pub event: Option<GateEvent>,
}

/// A single procedural run. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateRun {
    pub id: Uuid,
    pub name: String,
    pub biome: Biome,
    pub floors: Vec<Floor>,
    pub current_floor: usize,
    pub stamina: i32,
    pub max_stamina: i32,
    pub status: GateStatus,
    pub rewards: GateRewards,
    pub last_event_result: Option<EventResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateOutcome {
    Completed,
    Escaped,
    Failed,
}

/// Terminal record of a finished run, kept for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateResult {
    pub name: String,
    pub outcome: GateOutcome,
    pub floors_cleared: usize,
    pub rewards: GateRewards,
}

impl GateResult {
    pub fn is_success(&self) -> bool {
        self.outcome != GateOutcome::Failed
    }
}
