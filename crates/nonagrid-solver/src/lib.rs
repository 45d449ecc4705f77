//! Human-style technique solving for the nonagrid Sudoku engine.
//!
//! The solver applies a ladder of deduction techniques in a fixed priority
//! order, accumulating a weighted difficulty score as it goes. The active
//! technique set is gated by [`Difficulty`], so a puzzle reduced for an easy
//! tier is never required to be solved with advanced techniques.
//!
//! # Examples
//!
//! ```
//! use nonagrid_core::Grid;
//! use nonagrid_solver::{Difficulty, TechniqueSolver};
//!
//! let mut grid: Grid =
//!     "034678912672095348198342067859761423426853791713924856961537284287419635345286179"
//!         .parse()
//!         .unwrap();
//! let solver = TechniqueSolver::for_difficulty(Difficulty::Easy);
//! let (solved, stats) = solver.solve(&mut grid).unwrap();
//! assert!(solved);
//! assert!(stats.score() > 0);
//! ```

pub use self::{difficulty::Difficulty, error::SolverError, technique_solver::*};

mod difficulty;
mod error;
pub mod technique;
mod technique_solver;

#[cfg(test)]
mod testing;
