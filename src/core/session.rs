//! A running game session.
//!
//! `Session` owns the [`GameState`], the virtual-clock [`Scheduler`], the
//! RNG and the notification slot. Every player action is a method returning
//! `Result<_, ActionError>`; an `Err` leaves the state untouched. Time only
//! moves through [`Session::advance`].

use super::config::GameConfig;
use super::constants::{COUNTDOWN_TICK_MS, EVENT_LOG_CAPACITY};
use super::error::ActionError;
use super::events::GameEvent;
use super::game_state::GameState;
use super::progression::{apply_quest_reward, grant_player_experience, report_completed};
use super::scheduler::{Scheduler, TimerId};
use super::tick::{wave_tick, WaveOutcome};
use crate::army::{apply_upgrade, monarch_unit};
use crate::character::ascension::{perform_ascension, AscensionReward};
use crate::character::skill_tree::purchase_node;
use crate::character::skills::{skill_definition, SkillEffect};
use crate::dungeons::{self, claim_objectives, DungeonReward, RewardKind, COMPLETE_DUNGEON_OBJECTIVE};
use crate::gates::{generate_gate, Biome, EventResult, GateResult, GateRun, RunStep};
use crate::ledger::Currency;
use crate::monarchs::MonarchKind;
use crate::raid::{RaidReward, RAID_DEFEAT_OBJECTIVE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info};

fn countdown_period() -> Duration {
    Duration::from_millis(COUNTDOWN_TICK_MS)
}

pub struct Session {
    state: GameState,
    scheduler: Scheduler,
    rng: StdRng,
    config: GameConfig,
    notification: Option<String>,
    events: VecDeque<GameEvent>,
    closed: bool,
}

impl Session {
    /// Builds the state from `config` and starts the combat loop and the
    /// raid countdown.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(TimerId::CombatLoop, config.combat_tick);
        scheduler.schedule_repeating(TimerId::RaidCountdown, countdown_period());
        info!(
            zone = config.starting_zone,
            wave = config.starting_wave,
            "session started"
        );
        Self {
            state: GameState::new(&config),
            scheduler,
            rng,
            config,
            notification: None,
            events: VecDeque::new(),
            closed: false,
        }
    }

    // ── Observation ─────────────────────────────────────────────

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Virtual time since the session started.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// The visible notification, if its window has not elapsed.
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of live timers.
    pub fn live_timers(&self) -> usize {
        self.scheduler.len()
    }

    pub fn is_timer_live(&self, id: &TimerId) -> bool {
        self.scheduler.is_scheduled(id)
    }

    /// The most recent events, oldest first.
    pub fn recent_events(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Drains the event log.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    // ── Internals ───────────────────────────────────────────────

    fn ensure_open(&self) -> Result<(), ActionError> {
        if self.closed {
            return Err(ActionError::SessionClosed);
        }
        Ok(())
    }

    /// Logs events; the last one carrying a notification takes the slot and
    /// restarts its window.
    fn record(&mut self, events: Vec<GameEvent>) {
        for event in events {
            if let Some(text) = event.notification() {
                self.notification = Some(text);
                self.scheduler
                    .schedule_once(TimerId::Notification, self.config.notification_window);
            }
            if self.events.len() == EVENT_LOG_CAPACITY {
                self.events.pop_front();
            }
            self.events.push_back(event);
        }
    }

    /// Shows a rejection to the player and hands it back.
    fn reject_visibly(&mut self, err: ActionError) -> ActionError {
        self.record(vec![GameEvent::ActionRejected {
            message: err.to_string(),
        }]);
        err
    }

    // ── Clock ───────────────────────────────────────────────────

    /// Moves virtual time forward by `dt`, firing every due timer in order.
    /// The clock stops at `Duration::MAX`.
    pub fn advance(&mut self, dt: Duration) -> Result<(), ActionError> {
        self.ensure_open()?;
        let target = self.scheduler.now().saturating_add(dt);
        while let Some(id) = self.scheduler.pop_due(target) {
            self.fire(id);
        }
        self.scheduler.advance_to(target);
        Ok(())
    }

    fn fire(&mut self, id: TimerId) {
        let mut events = Vec::new();
        match &id {
            TimerId::CombatLoop => {
                wave_tick(&mut self.state, false, &mut events);
            }
            TimerId::Dungeon(dungeon_id) => self.tick_dungeon(dungeon_id, &mut events),
            TimerId::RaidCountdown => self.tick_raid_countdown(&mut events),
            TimerId::RaidDamage => self.tick_raid_damage(&mut events),
            TimerId::SkillCooldown(skill_id) => {
                match self.state.skill_mut(skill_id) {
                    Some(skill) => {
                        if skill.tick_cooldown() {
                            events.push(GameEvent::SkillReady {
                                name: skill.name.clone(),
                            });
                            self.scheduler.cancel(&id);
                        }
                    }
                    None => {
                        self.scheduler.cancel(&id);
                    }
                }
            }
            TimerId::BuffExpiry(skill_id) => self.expire_buff(skill_id, &mut events),
            TimerId::Notification => self.notification = None,
        }
        self.record(events);
    }

    fn tick_dungeon(&mut self, dungeon_id: &str, events: &mut Vec<GameEvent>) {
        let timer = TimerId::Dungeon(dungeon_id.to_string());
        match dungeons::logic::find_mut(&mut self.state.dungeons, dungeon_id) {
            Ok(dungeon) => {
                if dungeons::logic::tick_second(dungeon) {
                    info!(dungeon = %dungeon.name, "dungeon completed");
                    events.push(GameEvent::DungeonCompleted {
                        name: dungeon.name.clone(),
                    });
                    self.scheduler.cancel(&timer);
                } else if dungeon.status != dungeons::DungeonStatus::InProgress {
                    self.scheduler.cancel(&timer);
                }
            }
            Err(_) => {
                self.scheduler.cancel(&timer);
            }
        }
    }

    fn stop_raid_timers(&mut self) {
        self.scheduler.cancel(&TimerId::RaidCountdown);
        self.scheduler.cancel(&TimerId::RaidDamage);
    }

    fn tick_raid_countdown(&mut self, events: &mut Vec<GameEvent>) {
        if self.state.raid.countdown_second() {
            info!("raid expired");
            events.push(GameEvent::RaidEnded);
            self.stop_raid_timers();
        } else if !self.state.raid.is_active() {
            self.stop_raid_timers();
        }
    }

    fn tick_raid_damage(&mut self, events: &mut Vec<GameEvent>) {
        if !self.state.raid.participating || !self.state.raid.is_active() {
            self.scheduler.cancel(&TimerId::RaidDamage);
            return;
        }
        let damage = self.state.total_army_attack();
        let outcome = self.state.raid.apply_damage(damage);
        let boss = self.state.raid.boss.name.clone();
        debug!(damage, hp = self.state.raid.boss.current_hp, "raid damage");
        if let Some(phase) = outcome.entered_phase {
            events.push(GameEvent::RaidPhaseEntered {
                boss: boss.clone(),
                phase,
            });
        }
        if outcome.defeated {
            info!(boss = %boss, "raid boss defeated");
            events.push(GameEvent::RaidBossDefeated { boss });
            let completed = self.state.quests.update_progress(RAID_DEFEAT_OBJECTIVE, 1);
            report_completed(completed, events);
            self.stop_raid_timers();
        }
    }

    fn expire_buff(&mut self, skill_id: &str, events: &mut Vec<GameEvent>) {
        let effect = match self.state.skills.iter().find(|s| s.id == skill_id) {
            Some(skill) => skill.effect,
            None => return,
        };
        match effect {
            SkillEffect::ClickMultiplier { .. } => self.state.click_multiplier = 1,
            SkillEffect::GainMultiplier { .. } => self.state.gain_multiplier = 1.0,
            SkillEffect::RushWave | SkillEffect::Announce => return,
        }
        events.push(GameEvent::BuffExpired {
            skill: skill_id.to_string(),
        });
    }

    // ── Actions: economy ────────────────────────────────────────

    /// Manual click: credits `10 * zone * click_multiplier` mana.
    pub fn click_for_mana(&mut self) -> Result<u64, ActionError> {
        self.ensure_open()?;
        let amount = self.state.click_mana();
        self.state.ledger.credit(Currency::Mana, amount);
        self.record(vec![GameEvent::ManaClicked { amount }]);
        Ok(amount)
    }

    pub fn purchase_upgrade(&mut self, unit_name: &str, index: usize) -> Result<(), ActionError> {
        self.ensure_open()?;
        let state = &mut self.state;
        let unit = state
            .army
            .iter_mut()
            .find(|u| u.name == unit_name)
            .ok_or_else(|| ActionError::unknown("unit", unit_name))?;
        apply_upgrade(unit, index, &mut state.ledger)?;
        let upgrade = unit.upgrades[index].name.clone();
        self.record(vec![GameEvent::UpgradePurchased {
            unit: unit_name.to_string(),
            upgrade,
        }]);
        Ok(())
    }

    /// Returns the node's new level.
    pub fn purchase_skill_node(&mut self, node_id: &str) -> Result<u32, ActionError> {
        self.ensure_open()?;
        let level = purchase_node(
            &mut self.state.skill_trees,
            node_id,
            &mut self.state.player.skill_points,
        )?;
        let name = self
            .state
            .skill_trees
            .iter()
            .flat_map(|tree| tree.nodes.iter())
            .find(|node| node.id == node_id)
            .map(|node| node.name.clone())
            .unwrap_or_else(|| node_id.to_string());
        self.record(vec![GameEvent::SkillNodeLearned { name, level }]);
        Ok(level)
    }

    /// Equips or unequips an artifact. Returns the new equipped flag.
    pub fn toggle_artifact(&mut self, id: u32) -> Result<bool, ActionError> {
        self.ensure_open()?;
        let equipped = match self.state.inventory.toggle_artifact(id) {
            Ok(equipped) => equipped,
            Err(err @ ActionError::ArtifactCapReached(_)) => return Err(self.reject_visibly(err)),
            Err(err) => return Err(err),
        };
        let name = self
            .state
            .inventory
            .artifacts
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.name.clone())
            .unwrap_or_default();
        self.record(vec![GameEvent::ArtifactToggled { name, equipped }]);
        Ok(equipped)
    }

    // ── Actions: skills ─────────────────────────────────────────

    pub fn activate_skill(&mut self, skill_id: &str) -> Result<(), ActionError> {
        self.ensure_open()?;
        let skill = self
            .state
            .skill_mut(skill_id)
            .ok_or_else(|| ActionError::unknown("skill", skill_id))?;
        skill.start_cooldown()?;
        let effect = skill.effect;
        let name = skill.name.clone();

        let mut events = Vec::new();
        match effect {
            SkillEffect::ClickMultiplier {
                factor,
                duration_secs,
            } => {
                self.state.click_multiplier = factor;
                self.scheduler.schedule_once(
                    TimerId::BuffExpiry(skill_id.to_string()),
                    Duration::from_secs(duration_secs),
                );
            }
            SkillEffect::GainMultiplier {
                factor,
                duration_secs,
            } => {
                self.state.gain_multiplier = factor;
                self.scheduler.schedule_once(
                    TimerId::BuffExpiry(skill_id.to_string()),
                    Duration::from_secs(duration_secs),
                );
            }
            SkillEffect::RushWave => {
                wave_tick(&mut self.state, true, &mut events);
            }
            SkillEffect::Announce => {
                events.push(GameEvent::UltimateUnleashed { name: name.clone() });
            }
        }
        events.push(GameEvent::SkillActivated { name });
        self.scheduler.schedule_repeating(
            TimerId::SkillCooldown(skill_id.to_string()),
            countdown_period(),
        );
        self.record(events);
        Ok(())
    }

    /// Forces one wave outside the combat loop, as Shadow Rush does.
    pub fn rush_wave(&mut self) -> Result<WaveOutcome, ActionError> {
        self.ensure_open()?;
        let mut events = Vec::new();
        let outcome = wave_tick(&mut self.state, true, &mut events);
        self.record(events);
        Ok(outcome)
    }

    // ── Actions: timed dungeons ─────────────────────────────────

    pub fn start_dungeon(&mut self, dungeon_id: &str) -> Result<(), ActionError> {
        self.ensure_open()?;
        let dungeon = dungeons::logic::find_mut(&mut self.state.dungeons, dungeon_id)?;
        dungeons::logic::start(dungeon)?;
        let name = dungeon.name.clone();
        self.scheduler
            .schedule_repeating(TimerId::Dungeon(dungeon_id.to_string()), countdown_period());
        self.record(vec![GameEvent::DungeonStarted { name }]);
        Ok(())
    }

    /// Pays out a completed dungeon and fires its quest events.
    pub fn claim_dungeon(&mut self, dungeon_id: &str) -> Result<DungeonReward, ActionError> {
        self.ensure_open()?;
        let dungeon = dungeons::logic::find_mut(&mut self.state.dungeons, dungeon_id)?;
        let reward = dungeons::logic::claim(dungeon)?;
        let name = dungeon.name.clone();

        let mut events = Vec::new();
        match reward.kind {
            RewardKind::Mana => self.state.ledger.credit(Currency::Mana, reward.amount),
            RewardKind::Gems => self.state.ledger.credit(Currency::Gems, reward.amount),
            RewardKind::Xp => grant_player_experience(&mut self.state, reward.amount, &mut events),
        }
        events.push(GameEvent::DungeonClaimed { name, reward });

        let objectives = std::iter::once(COMPLETE_DUNGEON_OBJECTIVE)
            .chain(claim_objectives(dungeon_id).iter().copied());
        for objective in objectives {
            let completed = self.state.quests.update_progress(objective, 1);
            report_completed(completed, &mut events);
        }
        self.record(events);
        Ok(reward)
    }

    // ── Actions: raid ───────────────────────────────────────────

    /// Joins or leaves the raid. Returns the new participation flag.
    pub fn toggle_raid(&mut self) -> Result<bool, ActionError> {
        self.ensure_open()?;
        let participating = self.state.raid.toggle_participation()?;
        if participating {
            self.scheduler
                .schedule_repeating(TimerId::RaidDamage, countdown_period());
        } else {
            self.scheduler.cancel(&TimerId::RaidDamage);
        }
        self.record(vec![GameEvent::RaidParticipation { participating }]);
        Ok(participating)
    }

    pub fn claim_raid_rewards(&mut self) -> Result<RaidReward, ActionError> {
        self.ensure_open()?;
        let reward = self.state.raid.claim_rewards()?;
        self.state
            .ledger
            .credit(Currency::ShadowEssence, reward.shadow_essence);
        self.state.ledger.credit(Currency::Gems, reward.gems);
        self.record(vec![GameEvent::RaidRewardsClaimed { reward }]);
        Ok(reward)
    }

    // ── Actions: quests ─────────────────────────────────────────

    pub fn start_quest(&mut self, quest_id: &str) -> Result<(), ActionError> {
        self.ensure_open()?;
        let title = self.state.quests.start(quest_id)?.title.clone();
        info!(quest = %title, "quest started");
        self.record(vec![GameEvent::QuestStarted { title }]);
        Ok(())
    }

    /// Claims a completed quest. Returns the reward summary line.
    pub fn claim_quest(&mut self, quest_id: &str) -> Result<String, ActionError> {
        self.ensure_open()?;
        let (title, reward) = self.state.quests.claim(quest_id)?;
        let summary = apply_quest_reward(&mut self.state, &reward);
        info!(quest = %title, "quest claimed");
        self.record(vec![GameEvent::QuestClaimed {
            title,
            summary: summary.clone(),
        }]);
        Ok(summary)
    }

    /// Buys the refine objective of an in-progress quest outright.
    pub fn refine_shards(&mut self, quest_id: &str) -> Result<(), ActionError> {
        self.ensure_open()?;
        let completed = match self
            .state
            .quests
            .refine_shards(quest_id, &mut self.state.ledger)
        {
            Ok(completed) => completed,
            Err(err @ ActionError::InsufficientFunds { .. }) => {
                return Err(self.reject_visibly(err))
            }
            Err(err) => return Err(err),
        };
        let mut events = vec![GameEvent::ShardsRefined {
            quest: quest_id.to_string(),
        }];
        if completed {
            let title = self
                .state
                .quests
                .get(quest_id)
                .map(|q| q.title.clone())
                .unwrap_or_default();
            report_completed(vec![title], &mut events);
        }
        self.record(events);
        Ok(())
    }

    // ── Actions: ascension and monarchs ─────────────────────────

    pub fn ascend(&mut self) -> Result<AscensionReward, ActionError> {
        self.ensure_open()?;
        let reward = match perform_ascension(&mut self.state) {
            Ok(reward) => reward,
            Err(err) => return Err(self.reject_visibly(err)),
        };
        info!(
            essence = reward.shadow_essence,
            points = reward.sovereign_points,
            count = self.state.ascension_count,
            "ascended"
        );
        self.record(vec![GameEvent::Ascended {
            essence: reward.shadow_essence,
            points: reward.sovereign_points,
        }]);
        Ok(reward)
    }

    /// Swears allegiance to a monarch, granting its unit and ultimate.
    pub fn select_monarch(&mut self, kind: MonarchKind) -> Result<(), ActionError> {
        self.ensure_open()?;
        let monarch = self
            .state
            .monarchs
            .select(kind, self.state.ascension_count)?
            .clone();

        if !self.state.army.iter().any(|u| u.name == monarch.unique_unit) {
            if let Some(unit) = monarch_unit(&monarch.unique_unit) {
                self.state.army.push(unit);
            }
        }
        if !self.state.skills.iter().any(|s| s.id == monarch.ultimate) {
            if let Some(skill) = skill_definition(&monarch.ultimate) {
                self.state.skills.push(skill);
            }
        }
        info!(monarch = %monarch.name, "monarch selected");
        self.record(vec![GameEvent::MonarchSelected { name: monarch.name }]);
        Ok(())
    }

    pub fn purchase_monarch_node(&mut self, node_id: &str) -> Result<(), ActionError> {
        self.ensure_open()?;
        let name = self
            .state
            .monarchs
            .purchase_node(node_id, &mut self.state.ledger)?
            .name
            .clone();
        self.record(vec![GameEvent::MonarchNodeLearned { name }]);
        Ok(())
    }

    // ── Actions: gates ──────────────────────────────────────────

    /// Opens a new gate run. The combat loop pauses until the run ends.
    pub fn generate_gate(&mut self, biome: Biome, depth: u32) -> Result<&GateRun, ActionError> {
        self.ensure_open()?;
        if self.state.gate.is_some() {
            return Err(ActionError::RunAlreadyActive);
        }
        let run = generate_gate(biome, depth, &mut self.rng)?;
        info!(gate = %run.name, id = %run.id, "gate opened");
        self.scheduler.cancel(&TimerId::CombatLoop);
        self.record(vec![GameEvent::GateEntered {
            name: run.name.clone(),
            depth: run.depth(),
        }]);
        self.state.last_gate_result = None;
        Ok(self.state.gate.insert(run))
    }

    pub fn advance_floor(&mut self) -> Result<RunStep, ActionError> {
        self.ensure_open()?;
        let zone = self.state.zone;
        let modifiers = self.state.gain_modifiers();
        let gate = self.state.gate.as_mut().ok_or(ActionError::NoActiveRun)?;
        let cleared = gate.current_floor;
        let step = gate.advance_floor(zone, &modifiers)?;

        let mut events = vec![GameEvent::GateFloorCleared { floor: cleared }];
        if let RunStep::Finished(result) = &step {
            self.finish_gate(result.clone(), &mut events);
        }
        self.record(events);
        Ok(step)
    }

    /// Picks an option of the pending event.
    pub fn resolve_event(&mut self, option_index: usize) -> Result<EventResult, ActionError> {
        self.ensure_open()?;
        let zone = self.state.zone;
        let gate = self.state.gate.as_mut().ok_or(ActionError::NoActiveRun)?;
        let (result, step) =
            gate.resolve_event(option_index, zone, &mut self.state.ledger, &mut self.rng)?;

        let mut events = vec![GameEvent::GateEventResolved {
            text: result.text.clone(),
        }];
        if let RunStep::Finished(outcome) = step {
            self.finish_gate(outcome, &mut events);
        }
        self.record(events);
        Ok(result)
    }

    /// Leaves the run with everything gathered so far.
    pub fn escape_gate(&mut self) -> Result<GateResult, ActionError> {
        self.ensure_open()?;
        let gate = self.state.gate.as_mut().ok_or(ActionError::NoActiveRun)?;
        let result = gate.escape()?;
        let mut events = Vec::new();
        self.finish_gate(result.clone(), &mut events);
        self.record(events);
        Ok(result)
    }

    /// Credits a finished run, tears it down and resumes the combat loop.
    fn finish_gate(&mut self, result: GateResult, events: &mut Vec<GameEvent>) {
        self.state
            .ledger
            .credit(Currency::Mana, result.rewards.mana);
        self.state.ledger.credit(Currency::Gems, result.rewards.gems);
        self.state.gate = None;
        self.scheduler
            .schedule_repeating(TimerId::CombatLoop, self.config.combat_tick);
        info!(
            gate = %result.name,
            outcome = ?result.outcome,
            mana = result.rewards.mana,
            gems = result.rewards.gems,
            "gate finished"
        );
        self.state.last_gate_result = Some(result.clone());
        events.push(GameEvent::GateFinished { result });
    }

    // ── Teardown ────────────────────────────────────────────────

    /// Cancels every live timer and closes the session. Later calls are
    /// rejected with `SessionClosed`. Returns how many timers were live.
    pub fn shutdown(&mut self) -> usize {
        let cancelled = self.scheduler.clear();
        if !self.closed {
            info!(cancelled, "session shut down");
        }
        self.closed = true;
        self.state.raid.participating = false;
        cancelled
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}
