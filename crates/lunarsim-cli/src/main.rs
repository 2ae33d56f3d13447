//! Lunar mining simulation runner.
//!
//! Runs a 72-hour simulation of N mining trucks and M unload stations and
//! prints per-truck and per-station throughput. Logs go to stderr
//! (`RUST_LOG=debug` for assignments, `trace` for every state change).
//!
//! Usage:
//!   cargo run -p lunarsim-cli -- 10 3
//!   cargo run -p lunarsim-cli -- 10 3 --seed 42 --json

use anyhow::{Context, Result};
use clap::Parser;
use lunarsim_logic::config::SimulationConfig;
use lunarsim_logic::simulation::Simulation;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "lunarsim",
    version,
    about = "Simulates a lunar mining operation with N trucks and M unload stations"
)]
struct Cli {
    /// Number of mining trucks (must be > 0).
    #[arg(allow_negative_numbers = true)]
    num_trucks: i64,
    /// Number of unload stations (must be > 0).
    #[arg(allow_negative_numbers = true)]
    num_stations: i64,
    /// Seed for load-time sampling, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = SimulationConfig::new(cli.num_trucks, cli.num_stations)
        .context("invalid simulation configuration")?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    log::debug!("config: {:?}", config);

    let mut simulation = Simulation::new(config).context("invalid simulation configuration")?;
    simulation.run();
    let report = simulation.report();

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode report")?
        );
    } else {
        print!("{}", report);
    }
    Ok(())
}

/// Stderr subscriber; `log` records from the simulation are bridged in.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_counts() {
        let cli = Cli::try_parse_from(["lunarsim", "10", "3"]).unwrap();
        assert_eq!(cli.num_trucks, 10);
        assert_eq!(cli.num_stations, 3);
        assert_eq!(cli.seed, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["lunarsim", "4", "2", "--seed", "9", "--json"]).unwrap();
        assert_eq!(cli.seed, Some(9));
        assert!(cli.json);
    }

    #[test]
    fn test_negative_count_reaches_validation() {
        let cli = Cli::try_parse_from(["lunarsim", "-1", "2"]).unwrap();
        let err = SimulationConfig::new(cli.num_trucks, cli.num_stations).unwrap_err();
        assert!(err.to_string().contains("number of trucks"));
    }

    #[test]
    fn test_unparsable_count_rejected() {
        let err = Cli::try_parse_from(["lunarsim", "ten", "2"]).unwrap_err();
        assert!(err.to_string().contains("NUM_TRUCKS"));
    }

    #[test]
    fn test_missing_argument_rejected() {
        assert!(Cli::try_parse_from(["lunarsim", "3"]).is_err());
    }
}
