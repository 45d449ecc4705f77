//! Puzzle generation for the nonagrid Sudoku engine.
//!
//! Generation runs in three stages: a randomized backtracking fill produces
//! a complete valid grid, a reducer strips cells while the tier's technique
//! ladder can still finish the puzzle, and the resulting difficulty score is
//! checked against the requested tier's band, retrying the whole cycle on a
//! mismatch.
//!
//! All randomness flows through a single [`Seed`]-derived RNG, so any
//! generated puzzle can be reproduced exactly from its seed.
//!
//! # Examples
//!
//! ```
//! use nonagrid_generator::PuzzleGenerator;
//! use nonagrid_solver::Difficulty;
//!
//! let generator = PuzzleGenerator::new(Difficulty::Easy);
//! let puzzle = generator.generate().unwrap();
//! assert!(puzzle.solution.is_full());
//! assert!(puzzle.score < 200);
//! ```

pub use self::{
    classify::{classify, matches_band},
    error::GenerateError,
    filler::{FILL_STEP_BUDGET, fill_board},
    generator::{GeneratedPuzzle, MAX_ATTEMPTS, PuzzleGenerator},
    reducer::PuzzleReducer,
    seed::{ParseSeedError, Seed},
};

mod classify;
mod error;
mod filler;
mod generator;
mod reducer;
mod seed;
