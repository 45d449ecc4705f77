use derive_more::{Display, Error, From};
use nonagrid_solver::{Difficulty, SolverError};

/// Error returned when puzzle generation fails.
///
/// Both the backtracking fill and the classify-and-retry loop are
/// randomized and unbounded in principle; rather than looping silently,
/// generation gives up with a typed error once its explicit budget is
/// spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GenerateError {
    /// The backtracking fill exceeded its step budget.
    #[display("board filling exceeded its budget of {budget} steps")]
    Timeout {
        /// The step budget that was exhausted.
        budget: u64,
    },
    /// No puzzle matching the requested difficulty band was found within
    /// the attempt ceiling.
    #[display("no {difficulty} puzzle found within {attempts} attempts")]
    DifficultyUnreachable {
        /// The requested difficulty tier.
        difficulty: Difficulty,
        /// Number of fill-and-reduce cycles tried.
        attempts: u32,
    },
    /// The solver reported an unsolvable state during reduction.
    #[display("solving failed during reduction: {_0}")]
    #[from]
    Solver(SolverError),
}
