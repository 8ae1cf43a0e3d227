//! Headless game simulator CLI.
//!
//! Plays seeded sessions on a virtual clock with a scripted policy and
//! prints a balance report.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 20 runs of 6 hours
//!   cargo run --bin simulate -- -n 5 --hours 1    # 5 one-hour runs
//!   cargo run --bin simulate -- --seed 42         # Reproducible run
//!   RUST_LOG=monarch=debug cargo run --bin simulate -- --quick

use monarch::gates::Biome;
use monarch::simulator::{run_simulation, SimConfig, StartProfile};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("monarch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              MONARCH GAME SIMULATOR                           ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Seconds/run:    {}", config.seconds_per_run);
    println!("  Profile:        {:?}", config.profile);
    println!("  Dungeons:       {}", config.run_dungeons);
    println!("  Raid:           {}", config.join_raid);
    println!("  Ascend:         {}", config.ascend);
    match config.gate_interval_secs {
        Some(interval) => println!(
            "  Gates:          {} depth {} every {}s",
            config.gate_biome.name(),
            config.gate_depth,
            interval
        ),
        None => println!("  Gates:          off"),
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => {
                eprintln!("Failed to write JSON report {}: {}", filename, err);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--seconds" => {
                if i + 1 < args.len() {
                    config.seconds_per_run = args[i + 1].parse().unwrap_or(21_600);
                    i += 1;
                }
            }
            "--hours" => {
                if i + 1 < args.len() {
                    if let Ok(hours) = args[i + 1].parse::<u64>() {
                        config.seconds_per_run = hours * 3_600;
                        i += 1;
                    }
                }
            }
            "--gate-depth" => {
                if i + 1 < args.len() {
                    config.gate_depth = args[i + 1].parse().unwrap_or(5);
                    i += 1;
                }
            }
            "--gate-every" => {
                if i + 1 < args.len() {
                    config.gate_interval_secs = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--frost" => {
                config.gate_biome = Biome::FrostCave;
            }
            "--no-gates" => {
                config.gate_interval_secs = None;
            }
            "--no-dungeons" => {
                config.run_dungeons = false;
            }
            "--no-raid" => {
                config.join_raid = false;
            }
            "--no-ascend" => {
                config.ascend = false;
            }
            "--fresh" => {
                config.profile = StartProfile::Fresh;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--climb" => {
                config = SimConfig::fresh_climb();
            }
            "--ascension" => {
                config = SimConfig::ascension_test();
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Monarch Game Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulated sessions (default: 20)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    --seconds <T>         Virtual seconds per run (default: 21,600)");
    println!("    --hours <H>           Virtual hours per run");
    println!("    --gate-depth <D>      Floors per gate (default: 5)");
    println!("    --gate-every <T>      Open a gate every T seconds (default: 900)");
    println!("    --frost               Run Frost Cave gates instead of Shadow Crypt");
    println!("    --no-gates            Never open gates");
    println!("    --no-dungeons         Skip timed dungeons");
    println!("    --no-raid             Stay out of the raid");
    println!("    --no-ascend           Never ascend");
    println!("    --fresh               Start from zone 1 instead of the veteran save");
    println!("    -v, --verbose         Print every run");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick test (5 runs of 30 minutes)");
    println!("    --climb               Fresh climb without dungeons or gates");
    println!("    --ascension           Long runs for ascension pacing");
    println!("    -h, --help            Show this help");
    println!();
    println!("Set RUST_LOG (e.g. monarch=debug) for per-tick logs on stderr.");
}
