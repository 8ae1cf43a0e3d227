//! Simulation report generation.

use super::stats::RunStats;
use crate::core::format_duration;
use crate::ledger::format_magnitude;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub seconds_per_run: u64,

    // Progression
    pub avg_final_zone: f64,
    pub avg_final_level: f64,
    pub avg_waves_cleared: f64,
    pub avg_ascensions: f64,
    /// Mean virtual second of the first ascension, over runs that ascended
    pub avg_first_ascension_secs: Option<f64>,

    // Economy
    pub avg_mana_from_waves: f64,
    pub avg_mana_from_clicks: f64,
    pub avg_final_essence: f64,
    pub avg_final_gems: f64,

    // Activities
    pub avg_quests_claimed: f64,
    pub avg_dungeons_claimed: f64,
    pub avg_skills_used: f64,
    pub raid_defeat_rate: f64,
    pub raid_rank_distribution: BTreeMap<u32, u32>,

    // Gates
    pub gates_run: u32,
    pub gate_success_rate: f64,
    pub avg_gate_mana: f64,

    /// Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, seconds_per_run: u64) -> Self {
        let num_runs = runs.len() as u32;

        let first_ascensions: Vec<f64> = runs
            .iter()
            .filter_map(|r| r.ascension_seconds.first())
            .map(|&s| s as f64)
            .collect();
        let avg_first_ascension_secs = if first_ascensions.is_empty() {
            None
        } else {
            Some(first_ascensions.iter().sum::<f64>() / first_ascensions.len() as f64)
        };

        let mut raid_rank_distribution = BTreeMap::new();
        for run in &runs {
            *raid_rank_distribution.entry(run.raid_rank).or_insert(0) += 1;
        }

        let gates_run: u32 = runs.iter().map(|r| r.gates_run()).sum();
        let gates_won: u32 = runs
            .iter()
            .map(|r| r.gates_cleared + r.gates_escaped)
            .sum();
        let gate_success_rate = if gates_run > 0 {
            gates_won as f64 / gates_run as f64
        } else {
            0.0
        };
        let avg_gate_mana = if gates_run > 0 {
            runs.iter().map(|r| r.gate_mana as f64).sum::<f64>() / gates_run as f64
        } else {
            0.0
        };

        Self {
            num_runs,
            seconds_per_run,
            avg_final_zone: mean(&runs, |r| r.final_zone as f64),
            avg_final_level: mean(&runs, |r| r.final_level as f64),
            avg_waves_cleared: mean(&runs, |r| r.waves_cleared as f64),
            avg_ascensions: mean(&runs, |r| r.ascensions as f64),
            avg_first_ascension_secs,
            avg_mana_from_waves: mean(&runs, |r| r.mana_from_waves as f64),
            avg_mana_from_clicks: mean(&runs, |r| r.mana_from_clicks as f64),
            avg_final_essence: mean(&runs, |r| r.final_essence as f64),
            avg_final_gems: mean(&runs, |r| r.final_gems as f64),
            avg_quests_claimed: mean(&runs, |r| r.quests_claimed as f64),
            avg_dungeons_claimed: mean(&runs, |r| r.dungeons_claimed as f64),
            avg_skills_used: mean(&runs, |r| r.skills_used as f64),
            raid_defeat_rate: mean(&runs, |r| if r.raid_boss_defeated { 1.0 } else { 0.0 }),
            raid_rank_distribution,
            gates_run,
            gate_success_rate,
            avg_gate_mana,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, {} virtual each\n\n",
            self.num_runs,
            format_duration(self.seconds_per_run)
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Zone:      {:.1}\n", self.avg_final_zone));
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Waves Cleared:   {:.0}\n", self.avg_waves_cleared));
        report.push_str(&format!("  Avg Ascensions:      {:.2}\n", self.avg_ascensions));
        match self.avg_first_ascension_secs {
            Some(secs) => report.push_str(&format!(
                "  First Ascension at:  {}\n\n",
                format_duration(secs as u64)
            )),
            None => report.push_str("  First Ascension at:  never\n\n"),
        }

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Mana from Waves:     {}\n",
            format_magnitude(self.avg_mana_from_waves)
        ));
        report.push_str(&format!(
            "  Mana from Clicks:    {}\n",
            format_magnitude(self.avg_mana_from_clicks)
        ));
        report.push_str(&format!(
            "  Final Essence:       {}\n",
            format_magnitude(self.avg_final_essence)
        ));
        report.push_str(&format!(
            "  Final Gems:          {}\n\n",
            format_magnitude(self.avg_final_gems)
        ));

        report.push_str("── ACTIVITIES ───────────────────────────────────────────────────\n");
        report.push_str(&format!("  Quests Claimed:      {:.1}\n", self.avg_quests_claimed));
        report.push_str(&format!("  Dungeons Claimed:    {:.1}\n", self.avg_dungeons_claimed));
        report.push_str(&format!("  Skills Used:         {:.1}\n", self.avg_skills_used));
        report.push_str(&format!(
            "  Raid Boss Defeated:  {:.1}%\n",
            self.raid_defeat_rate * 100.0
        ));
        for (rank, count) in &self.raid_rank_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Raid Rank {:2}: {:>5.1}% {}\n", rank, pct, bar));
        }
        report.push('\n');

        report.push_str("── GATES ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Runs:                {}\n", self.gates_run));
        report.push_str(&format!(
            "  Success Rate:        {:.1}%\n",
            self.gate_success_rate * 100.0
        ));
        report.push_str(&format!(
            "  Avg Mana per Gate:   {}\n",
            format_magnitude(self.avg_gate_mana)
        ));

        if self.gates_run > 0 && self.gate_success_rate < 0.5 {
            report.push_str("  ⚠️  Most gates fail - stamina too tight?\n");
        }
        if self.avg_first_ascension_secs.is_none() && self.avg_final_zone < 10.0 {
            report.push_str("  ⚠️  Runs stall early - wave rewards too low?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(zone: u32, ascension: Option<u64>, gates: (u32, u32)) -> RunStats {
        RunStats {
            final_zone: zone,
            final_level: 10,
            raid_rank: 3,
            ascension_seconds: ascension.into_iter().collect(),
            gates_cleared: gates.0,
            gates_failed: gates.1,
            gate_mana: 1_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![run(40, Some(100), (3, 1)), run(60, None, (1, 3))];
        let report = SimReport::from_runs(runs, 3_600);

        assert_eq!(report.num_runs, 2);
        assert!((report.avg_final_zone - 50.0).abs() < 1e-9);
        assert_eq!(report.avg_first_ascension_secs, Some(100.0));
        assert_eq!(report.gates_run, 8);
        assert!((report.gate_success_rate - 0.5).abs() < 1e-9);
        assert!((report.avg_gate_mana - 250.0).abs() < 1e-9);
        assert_eq!(report.raid_rank_distribution.get(&3), Some(&2));

        let text = report.to_text();
        assert!(text.contains("01:00:00 virtual each"));
        assert!(text.contains("First Ascension at:  00:01:40"));
    }

    #[test]
    fn test_json_report() {
        let report = SimReport::from_runs(vec![run(5, None, (0, 0))], 60);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["num_runs"], 1);
        assert_eq!(json["gates_run"], 0);
        assert!(json["avg_first_ascension_secs"].is_null());
    }
}
