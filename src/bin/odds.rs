//! Odds Generator Binary
//!
//! Estimates per-hand category frequencies by Monte Carlo sampling and
//! reports how often the exotic categories actually land.

use anyhow::Result;
use clap::Parser;
use exopoker::sim::odds::Odds;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of shuffled deals to sample.
    #[clap(long, default_value_t = 10000)]
    trials: usize,
    /// Number of players (and deck copies) per deal.
    #[clap(long, default_value_t = 4)]
    players: usize,
    /// Seed for reproducible estimates.
    #[clap(long)]
    seed: Option<u64>,
    /// Emit the full report as JSON on stdout.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    exopoker::log();
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let odds = Odds {
        trials: cli.trials,
        players: cli.players,
    };
    let report = odds.run(&mut rng)?;
    log::info!("{:<20}{}", "trials", report.trials);
    log::info!("{:<20}{}", "hands", report.hands);
    log::info!("{:<20}{:.4}%", "exotic rounds", report.exotic_rate * 100.);
    for estimate in report.categories.iter().filter(|e| e.count > 0) {
        log::info!(
            "{:<20}{:>8}  {:.4}%",
            estimate.category,
            estimate.count,
            estimate.frequency * 100.
        );
    }
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
