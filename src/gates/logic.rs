//! Floor-by-floor progression of a gate run.

use super::events::{option_cost, resolve_option};
use super::types::{
    EventResult, FloorType, GateOutcome, GateResult, GateRewards, GateRun, GateStatus,
};
use crate::core::constants::{
    GATE_BOSS_GEMS, GATE_BOSS_MANA_PER_ZONE, GATE_COMBAT_MANA_PER_ZONE, GATE_STAMINA_PER_FLOOR,
    GATE_TREASURE_GEMS, GATE_TREASURE_MANA_PER_ZONE,
};
use crate::core::error::ActionError;
use crate::ledger::{Currency, GainModifiers, Ledger};
use rand::Rng;

/// Reward for clearing one floor. Mana goes through the gain formula, gems
/// do not.
pub fn floor_reward(
    floor_type: FloorType,
    difficulty: f64,
    zone: u32,
    modifiers: &GainModifiers,
) -> GateRewards {
    let zone = zone as f64;
    let (mana_base, gems) = match floor_type {
        FloorType::Combat => (GATE_COMBAT_MANA_PER_ZONE * zone * difficulty, 0.0),
        FloorType::Treasure => (
            GATE_TREASURE_MANA_PER_ZONE * zone * difficulty,
            GATE_TREASURE_GEMS * difficulty,
        ),
        FloorType::Boss => (
            GATE_BOSS_MANA_PER_ZONE * zone * difficulty,
            GATE_BOSS_GEMS * difficulty,
        ),
        FloorType::Event => (0.0, 0.0),
    };
    GateRewards {
        mana: modifiers.apply(mana_base),
        gems: gems.floor() as u64,
    }
}

/// What happened after a player action on a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStep {
    /// The run goes on; the cursor is at `floor`.
    Continue { floor: usize },
    /// The run ended; rewards in the result must be credited.
    Finished(GateResult),
}

impl GateRun {
    pub fn depth(&self) -> usize {
        self.floors.len()
    }

    pub fn floors_cleared(&self) -> usize {
        self.floors.iter().filter(|f| f.cleared).count()
    }

    fn ensure_active(&self) -> Result<(), ActionError> {
        if self.status.is_terminal() {
            return Err(ActionError::NoActiveRun);
        }
        Ok(())
    }

    /// Clears the current floor and moves on. Event floors must be resolved
    /// first.
    pub fn advance_floor(&mut self, zone: u32, modifiers: &GainModifiers) -> Result<RunStep, ActionError> {
        self.ensure_active()?;
        if self.status == GateStatus::Event {
            return Err(ActionError::wrong_status(self.name.clone(), "ready to advance"));
        }

        let index = self.current_floor;
        let floor = &mut self.floors[index];
        let reward = floor_reward(floor.floor_type, floor.difficulty, zone, modifiers);
        floor.cleared = true;
        self.rewards.add(reward);
        self.stamina -= GATE_STAMINA_PER_FLOOR;

        if self.stamina <= 0 {
            return Ok(RunStep::Finished(self.fail()));
        }
        if index + 1 >= self.depth() {
            return Ok(RunStep::Finished(self.finish(GateOutcome::Completed)));
        }

        self.current_floor += 1;
        self.status = GateStatus::for_floor(self.floors[self.current_floor].floor_type);
        self.last_event_result = None;
        Ok(RunStep::Continue {
            floor: self.current_floor,
        })
    }

    /// Resolves the pending event with the chosen option. An option with a
    /// mana cost is rejected untouched if the ledger cannot cover it.
    pub fn resolve_event(
        &mut self,
        option_index: usize,
        zone: u32,
        ledger: &mut Ledger,
        rng: &mut impl Rng,
    ) -> Result<(EventResult, RunStep), ActionError> {
        self.ensure_active()?;
        if self.status != GateStatus::Event {
            return Err(ActionError::wrong_status(self.name.clone(), "at an event"));
        }
        let action = self.floors[self.current_floor]
            .event
            .as_ref()
            .and_then(|event| event.options.get(option_index))
            .map(|option| option.action)
            .ok_or_else(|| ActionError::unknown("event option", option_index.to_string()))?;

        let cost = option_cost(action, zone);
        if cost > 0 && !ledger.debit(Currency::Mana, cost) {
            return Err(ActionError::InsufficientFunds {
                currency: Currency::Mana,
                purpose: "make this offering",
            });
        }

        let result = resolve_option(action, zone, rng);
        self.stamina += result.stamina_change;
        self.rewards.add(result.rewards);

        if self.stamina <= 0 {
            return Ok((result, RunStep::Finished(self.fail())));
        }
        self.status = GateStatus::Exploring;
        self.last_event_result = Some(result.clone());
        Ok((
            result,
            RunStep::Continue {
                floor: self.current_floor,
            },
        ))
    }

    /// Leaves the run keeping everything gathered so far.
    pub fn escape(&mut self) -> Result<GateResult, ActionError> {
        self.ensure_active()?;
        Ok(self.finish(GateOutcome::Escaped))
    }

    fn fail(&mut self) -> GateResult {
        self.rewards = self.rewards.halved();
        self.finish(GateOutcome::Failed)
    }

    fn finish(&mut self, outcome: GateOutcome) -> GateResult {
        self.status = match outcome {
            GateOutcome::Failed => GateStatus::Failed,
            GateOutcome::Completed | GateOutcome::Escaped => GateStatus::Completed,
        };
        GateResult {
            name: self.name.clone(),
            outcome,
            floors_cleared: self.floors_cleared(),
            rewards: self.rewards,
        }
    }
}
