//! Main simulation runner.
//!
//! Each run drives a real [`Session`] one virtual second at a time and plays
//! it with a fixed scripted policy. Statistics are folded from the session's
//! event log, so the numbers match real gameplay exactly.

use super::config::SimConfig;
use super::report::SimReport;
use super::stats::RunStats;
use crate::character::ascension;
use crate::core::ActionError;
use crate::dungeons::DungeonStatus;
use crate::gates::{GateStatus, RunStep};
use crate::ledger::Currency;
use crate::monarchs::{is_unlocked, tier_unlocked, MonarchKind};
use crate::quests::{QuestStatus, REFINE_OBJECTIVE};
use crate::Session;
use std::time::Duration;
use tracing::{debug, info};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let stats = simulate_single_run(config, run_idx);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Zone {}.{}, Level {}, Ascensions {}, Gates {}/{}, Raid rank {}",
                run_idx + 1,
                config.num_runs,
                stats.final_zone,
                stats.final_wave,
                stats.final_level,
                stats.ascensions,
                stats.gates_cleared + stats.gates_escaped,
                stats.gates_run(),
                stats.raid_rank
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.seconds_per_run)
}

/// Plays one session for `config.seconds_per_run` virtual seconds.
pub fn simulate_single_run(config: &SimConfig, run_idx: u32) -> RunStats {
    let mut session = Session::new(config.game_config(run_idx));
    let mut stats = RunStats::default();

    for second in 1..=config.seconds_per_run {
        if session.advance(Duration::from_secs(1)).is_err() {
            break;
        }
        play_second(&mut session, config, second);
        for event in session.take_events() {
            stats.record(&event, second);
        }
    }

    stats.finalize(&session);
    let cancelled = session.shutdown();
    info!(
        run = run_idx,
        zone = stats.final_zone,
        ascensions = stats.ascensions,
        cancelled,
        "simulated run finished"
    );
    stats
}

/// Logs a rejected policy action. Rejections are expected: the policy tries
/// things without checking every precondition first.
fn attempt<T>(action: &str, result: Result<T, ActionError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(action, %err, "policy action rejected");
            None
        }
    }
}

// ── Policy ──────────────────────────────────────────────────────

fn play_second(session: &mut Session, config: &SimConfig, second: u64) {
    attempt("click", session.click_for_mana());

    if config.use_skills {
        use_ready_skills(session);
    }
    if config.run_dungeons {
        cycle_dungeons(session);
    }
    if config.join_raid {
        play_raid(session);
    }
    if config.run_quests {
        cycle_quests(session);
    }
    spend_points(session);
    buy_upgrades(session);

    if config.ascend && ascension::is_ready(session.state().zone) {
        attempt("ascend", session.ascend());
    }
    if is_unlocked(session.state().ascension_count) && session.state().monarchs.chosen.is_none()
    {
        attempt("select monarch", session.select_monarch(MonarchKind::Shadow));
    }

    if let Some(interval) = config.gate_interval_secs {
        if interval > 0 && second % interval == 0 && session.state().gate.is_none() {
            run_gate(session, config);
        }
    }
}

fn use_ready_skills(session: &mut Session) {
    let ready: Vec<String> = session
        .state()
        .skills
        .iter()
        .filter(|s| !s.on_cooldown && !s.is_ultimate())
        .map(|s| s.id.clone())
        .collect();
    for id in ready {
        attempt("skill", session.activate_skill(&id));
    }
}

fn cycle_dungeons(session: &mut Session) {
    let snapshot: Vec<(String, DungeonStatus)> = session
        .state()
        .dungeons
        .iter()
        .map(|d| (d.id.clone(), d.status))
        .collect();
    for (id, status) in snapshot {
        match status {
            DungeonStatus::Idle => {
                attempt("start dungeon", session.start_dungeon(&id));
            }
            DungeonStatus::Completed => {
                attempt("claim dungeon", session.claim_dungeon(&id));
            }
            DungeonStatus::InProgress => {}
        }
    }
}

fn play_raid(session: &mut Session) {
    let raid = &session.state().raid;
    if raid.is_active() && !raid.participating {
        attempt("join raid", session.toggle_raid());
    } else if !raid.is_active() && !raid.rewards_claimed {
        attempt("claim raid", session.claim_raid_rewards());
    }
}

fn cycle_quests(session: &mut Session) {
    let quests = &session.state().quests;
    let available: Vec<String> = quests
        .with_status(QuestStatus::Available)
        .map(|q| q.id.clone())
        .collect();
    let completed: Vec<String> = quests
        .with_status(QuestStatus::Completed)
        .map(|q| q.id.clone())
        .collect();
    let mana = session.state().ledger.balance(Currency::Mana);
    let refinable: Vec<String> = quests
        .with_status(QuestStatus::InProgress)
        .filter(|q| {
            q.objectives
                .iter()
                .any(|o| o.id == REFINE_OBJECTIVE && !o.is_complete() && o.target <= mana)
        })
        .map(|q| q.id.clone())
        .collect();

    for id in available {
        attempt("start quest", session.start_quest(&id));
    }
    for id in refinable {
        attempt("refine shards", session.refine_shards(&id));
    }
    for id in completed {
        attempt("claim quest", session.claim_quest(&id));
    }
}

/// Spends skill points on the first unfinished tree node, and sovereign
/// points on monarch nodes whose tier is open.
fn spend_points(session: &mut Session) {
    while session.state().player.skill_points > 0 {
        let next = session
            .state()
            .skill_trees
            .iter()
            .flat_map(|tree| tree.nodes.iter())
            .find(|node| node.level < node.max_level)
            .map(|node| node.id.clone());
        match next {
            Some(id) => {
                if attempt("skill node", session.purchase_skill_node(&id)).is_none() {
                    break;
                }
            }
            None => break,
        }
    }

    let state = session.state();
    let points = state.ledger.balance(Currency::SovereignPoints);
    let next = state.monarchs.active().and_then(|monarch| {
        monarch
            .tree
            .iter()
            .find(|node| {
                node.level < node.max_level
                    && node.cost <= points
                    && tier_unlocked(&monarch.tree, node.tier)
            })
            .map(|node| node.id.clone())
    });
    if let Some(id) = next {
        attempt("monarch node", session.purchase_monarch_node(&id));
    }
}

/// Buys every affordable upgrade the unit qualifies for.
fn buy_upgrades(session: &mut Session) {
    let mana = session.state().ledger.balance(Currency::Mana);
    let wanted: Vec<(String, usize)> = session
        .state()
        .army
        .iter()
        .flat_map(|unit| {
            unit.upgrades
                .iter()
                .enumerate()
                .filter(move |(_, u)| {
                    !u.purchased && u.cost <= mana && unit.level >= u.level_requirement
                })
                .map(move |(index, _)| (unit.name.clone(), index))
        })
        .collect();
    for (unit, index) in wanted {
        attempt("upgrade", session.purchase_upgrade(&unit, index));
    }
}

/// Plays a whole gate run: events take their first affordable option, and
/// the run is abandoned with the loot when one stamina is left.
fn run_gate(session: &mut Session, config: &SimConfig) {
    let floors = match attempt(
        "open gate",
        session.generate_gate(config.gate_biome, config.gate_depth),
    ) {
        Some(run) => run.floors.len(),
        None => return,
    };

    for _ in 0..floors * 2 {
        let (status, stamina, remaining) = match &session.state().gate {
            Some(run) => (run.status, run.stamina, run.floors.len() - run.current_floor),
            None => return,
        };
        if stamina <= 1 && remaining > 1 {
            attempt("escape gate", session.escape_gate());
            return;
        }
        let step = if status == GateStatus::Event {
            match session.resolve_event(0) {
                Ok(_) => None,
                Err(_) => {
                    attempt("resolve event", session.resolve_event(1));
                    None
                }
            }
        } else {
            attempt("advance floor", session.advance_floor())
        };
        if let Some(RunStep::Finished(_)) = step {
            return;
        }
    }

    if session.state().gate.is_some() {
        attempt("escape gate", session.escape_gate());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::config::StartProfile;

    fn short_config() -> SimConfig {
        SimConfig {
            num_runs: 2,
            seed: Some(42),
            seconds_per_run: 120,
            gate_interval_secs: Some(60),
            ..Default::default()
        }
    }

    #[test]
    fn test_veteran_run_ascends_immediately() {
        let stats = simulate_single_run(&short_config(), 0);
        assert_eq!(stats.ascensions, 1);
        assert_eq!(stats.ascension_seconds, vec![1]);
        assert!(stats.final_zone < 123);
        assert!(stats.waves_cleared > 0);
        assert_eq!(stats.gates_run(), 2);
    }

    #[test]
    fn test_fresh_run_climbs() {
        let config = SimConfig {
            seconds_per_run: 60,
            seed: Some(1),
            profile: StartProfile::Fresh,
            use_skills: false,
            ..SimConfig::fresh_climb()
        };
        let stats = simulate_single_run(&config, 0);
        assert_eq!(stats.ascensions, 0);
        assert_eq!(stats.waves_cleared, 30);
        assert_eq!((stats.final_zone, stats.final_wave), (4, 1));
        assert!(stats.mana_from_clicks > 0);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let config = short_config();
        let a = simulate_single_run(&config, 1);
        let b = simulate_single_run(&config, 1);
        assert_eq!(a.final_mana, b.final_mana);
        assert_eq!(a.gate_mana, b.gate_mana);
        assert_eq!(a.gates_failed, b.gates_failed);
    }

    #[test]
    fn test_report_covers_every_run() {
        let report = run_simulation(&short_config());
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.run_stats.len(), 2);
    }
}
