//! Example demonstrating Sudoku puzzle generation.
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Request a difficulty tier:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a puzzle from its printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 0000000000000000000000000000002a
//! ```
//!
//! Sample several puzzles in parallel and keep the highest score:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty medium --samples 32
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use nonagrid_generator::{GeneratedPuzzle, PuzzleGenerator, Seed};
use nonagrid_solver::Difficulty;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tier {
    Easy,
    Medium,
    Hard,
    Random,
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Difficulty::Easy,
            Tier::Medium => Difficulty::Medium,
            Tier::Hard => Difficulty::Hard,
            Tier::Random => Difficulty::Random,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier to generate.
    #[arg(long, value_name = "TIER", default_value = "random")]
    difficulty: Tier,

    /// Seed to reproduce a specific puzzle (hexadecimal).
    #[arg(long, value_name = "SEED")]
    seed: Option<Seed>,

    /// Generate this many puzzles and print the highest-scoring one.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty.into());

    if args.samples == 0 {
        eprintln!("--samples must be at least 1");
        process::exit(1);
    }

    let result = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None if args.samples == 1 => generator.generate(),
        None => {
            let seeds: Vec<_> = (0..args.samples).map(|_| Seed::from_entropy()).collect();
            seeds
                .into_par_iter()
                .map(|seed| generator.generate_with_seed(seed))
                .try_reduce_with(|a, b| Ok(if a.score >= b.score { a } else { b }))
                .unwrap_or_else(|| generator.generate())
        }
    };

    match result {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();
    println!("Score: {}", puzzle.score);
    println!("Elapsed: {:?}", puzzle.elapsed);
}
