//! Autopilot simulator CLI.
//!
//! Plays many headless runs and reports how long the bird survives.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 100 runs on an 800x600 field
//!   cargo run --bin simulate -- -n 500 --seed 42  # Reproducible batch
//!   cargo run --bin simulate -- --height 400      # Shorter field, less room to steer

use skyward::simulator::{run_simulation, SimConfig};
use skyward::utils::logging::init_stderr_logging;
use std::env;

fn main() {
    if let Err(e) = init_stderr_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 SKYWARD AUTOPILOT SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Playfield:      {} x {}", config.width, config.height);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = match report.to_json() {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to encode JSON report: {}", e);
                std::process::exit(1);
            }
        };
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, json) {
            eprintln!("Failed to write {}: {}", filename, e);
            std::process::exit(1);
        }
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        let next = args.get(i + 1);
        match args[i].as_str() {
            "-n" | "--runs" => {
                if let Some(v) = next {
                    config.num_runs = v.parse().unwrap_or(config.num_runs);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if let Some(v) = next {
                    config.seed = v.parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if let Some(v) = next {
                    config.max_ticks_per_run = v.parse().unwrap_or(config.max_ticks_per_run);
                    i += 1;
                }
            }
            "--width" => {
                if let Some(v) = next {
                    config.width = v.parse().unwrap_or(config.width);
                    i += 1;
                }
            }
            "--height" => {
                if let Some(v) = next {
                    config.height = v.parse().unwrap_or(config.height);
                    i += 1;
                }
            }
            "--json" => {}
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Skyward Autopilot Simulator\n");
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --runs <N>     Number of runs (default: 100)");
    println!("  -s, --seed <N>     Random seed for reproducibility");
    println!("  -t, --ticks <N>    Tick limit per run (default: 18000)");
    println!("      --width <W>    Playfield width (default: 800)");
    println!("      --height <H>   Playfield height (default: 600)");
    println!("      --json         Also save the report as JSON");
    println!("  -h, --help         Show this help");
}
