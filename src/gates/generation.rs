//! Procedural floor layout for gate runs.

use super::events::event_template;
use super::types::{Biome, Floor, FloorType, GateRewards, GateRun, GateStatus};
use crate::core::constants::{
    GATE_DIFFICULTY_DIVISOR, GATE_EVENT_CHANCE, GATE_STAMINA_PER_DEPTH, GATE_TREASURE_CHANCE,
    MAX_GATE_DEPTH,
};
use crate::core::error::ActionError;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// Rolls the type of a non-final floor from the cumulative table.
pub fn roll_floor_type(rng: &mut impl Rng) -> FloorType {
    let roll: f64 = rng.gen();
    if roll < GATE_TREASURE_CHANCE {
        FloorType::Treasure
    } else if roll < GATE_EVENT_CHANCE {
        FloorType::Event
    } else {
        FloorType::Combat
    }
}

pub fn difficulty_for_index(index: usize) -> f64 {
    1.0 + index as f64 / GATE_DIFFICULTY_DIVISOR
}

fn generate_floor(biome: Biome, floor_type: FloorType, index: usize, rng: &mut impl Rng) -> Floor {
    let difficulty = difficulty_for_index(index);
    let (encounter_text, event) = match floor_type {
        FloorType::Boss => (
            format!(
                "The air grows heavy. The dungeon's master, the {}, awaits!",
                biome.boss()
            ),
            None,
        ),
        FloorType::Treasure => (
            "A glimmer of light reveals a hidden treasure trove!".to_string(),
            None,
        ),
        FloorType::Event => {
            let kind = biome
                .event_pool()
                .choose(rng)
                .copied()
                .unwrap_or(biome.event_pool()[0]);
            let event = event_template(kind);
            (event.description.clone(), Some(event))
        }
        FloorType::Combat => {
            let enemy = biome.enemies().choose(rng).copied().unwrap_or("monsters");
            (format!("You encounter a group of hostile {}.", enemy), None)
        }
    };
    Floor {
        floor_type,
        difficulty,
        cleared: false,
        encounter_text,
        event,
    }
}

/// Builds a run of `depth` floors; the last one is always the boss.
///
/// # Arguments
/// * `biome` - Selects enemies, events and boss
/// * `depth` - Number of floors, from 1 to `MAX_GATE_DEPTH`
/// * `rng` - Source of the per-floor draws
pub fn generate_gate(biome: Biome, depth: u32, rng: &mut impl Rng) -> Result<GateRun, ActionError> {
    if depth == 0 || depth > MAX_GATE_DEPTH {
        return Err(ActionError::InvalidDepth(depth));
    }
    let stamina = i32::try_from(depth)
        .ok()
        .and_then(|d| d.checked_mul(GATE_STAMINA_PER_DEPTH))
        .ok_or(ActionError::InvalidDepth(depth))?;
    let depth = depth as usize;
    let floors: Vec<Floor> = (0..depth)
        .map(|index| {
            let floor_type = if index == depth - 1 {
                FloorType::Boss
            } else {
                roll_floor_type(rng)
            };
            generate_floor(biome, floor_type, index, rng)
        })
        .collect();

    let status = GateStatus::for_floor(floors[0].floor_type);
    Ok(GateRun {
        id: Uuid::new_v4(),
        name: format!("{} (Depth {})", biome.name(), depth),
        biome,
        floors,
        current_floor: 0,
        stamina,
        max_stamina: stamina,
        status,
        rewards: GateRewards::default(),
        last_event_result: None,
    })
}
