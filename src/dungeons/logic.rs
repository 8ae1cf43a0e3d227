//! Dungeon lifecycle: `Idle -> InProgress -> Completed -> (claim) -> Idle`.

use super::types::{DungeonReward, DungeonStatus, TimedDungeon};
use crate::core::error::ActionError;

pub fn find_mut<'a>(
    dungeons: &'a mut [TimedDungeon],
    id: &str,
) -> Result<&'a mut TimedDungeon, ActionError> {
    dungeons
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or_else(|| ActionError::unknown("dungeon", id))
}

/// Starts the countdown from the full duration.
pub fn start(dungeon: &mut TimedDungeon) -> Result<(), ActionError> {
    if dungeon.status != DungeonStatus::Idle {
        return Err(ActionError::wrong_status(dungeon.name.clone(), "idle"));
    }
    dungeon.status = DungeonStatus::InProgress;
    dungeon.remaining_secs = dungeon.duration_secs;
    Ok(())
}

/// One second of countdown. Returns true when the dungeon just completed.
pub fn tick_second(dungeon: &mut TimedDungeon) -> bool {
    if dungeon.status != DungeonStatus::InProgress {
        return false;
    }
    dungeon.remaining_secs = dungeon.remaining_secs.saturating_sub(1);
    if dungeon.remaining_secs == 0 {
        dungeon.status = DungeonStatus::Completed;
        return true;
    }
    false
}

/// Takes the reward of a completed dungeon and resets it to Idle with the
/// timer reloaded. The caller pays the reward out.
pub fn claim(dungeon: &mut TimedDungeon) -> Result<DungeonReward, ActionError> {
    if dungeon.status != DungeonStatus::Completed {
        return Err(ActionError::wrong_status(dungeon.name.clone(), "completed"));
    }
    dungeon.status = DungeonStatus::Idle;
    dungeon.remaining_secs = dungeon.duration_secs;
    Ok(dungeon.reward)
}
