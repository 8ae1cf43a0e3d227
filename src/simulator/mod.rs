//! Headless balance simulator.
//!
//! Plays many seeded sessions on the virtual clock with a scripted policy
//! and aggregates what happened:
//! - Zone and level pacing
//! - Time to the first ascension
//! - Mana sources and gate payouts
//! - Raid placement
//!
//! The simulator drives `Session` itself, so results match real gameplay.

mod config;
mod report;
mod runner;
mod stats;

pub use config::{SimConfig, StartProfile};
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run};
pub use stats::RunStats;
