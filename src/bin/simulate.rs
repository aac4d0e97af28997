//! Round Simulator Binary
//!
//! Plays full rounds at a standard three-character table and reports the
//! final standings.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use exopoker::sim::character::Character;
use exopoker::sim::round::Table;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of rounds to play.
    #[clap(long, default_value_t = 3)]
    rounds: usize,
    /// Seed for reproducible rounds.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    exopoker::log();
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut table = Table::new(Character::standard())?;
    for _ in 0..cli.rounds {
        table.play(&mut rng)?;
    }
    println!();
    println!("{}", "--- final standings ---".bold());
    for seat in table.seats() {
        let chips = match seat.chips - exopoker::STACK {
            gain if gain > 0 => format!("{} chips", seat.chips).green(),
            _ => format!("{} chips", seat.chips).normal(),
        };
        println!(
            "{:<24}{:>3} points  {}",
            seat.character.name, seat.points, chips
        );
    }
    Ok(())
}
