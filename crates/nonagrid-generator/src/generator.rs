use std::time::{Duration, Instant};

use log::debug;
use nonagrid_core::Grid;
use nonagrid_solver::{Difficulty, TechniqueSolver};

use crate::{GenerateError, PuzzleReducer, Seed, classify, filler};

/// Maximum fill-and-reduce cycles tried before generation gives up.
///
/// Band matching is probabilistic, so the retry loop is unbounded in
/// principle; in practice it converges within a handful of attempts.
pub const MAX_ATTEMPTS: u32 = 256;

/// A generated puzzle with its retained solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid. Clue cells are marked fixed.
    pub problem: Grid,
    /// The complete grid the problem was reduced from. Gameplay operations
    /// (revealing the solution, flagging wrong guesses) read this instead
    /// of re-solving.
    pub solution: Grid,
    /// Difficulty score of the final solve of the reduced grid.
    pub score: u32,
    /// Wall-clock time the generation took, including rejected attempts.
    pub elapsed: Duration,
    /// Seed that reproduces this puzzle exactly.
    pub seed: Seed,
}

/// Generates puzzles for a difficulty tier.
///
/// Each attempt fills a fresh complete grid, reduces it with the tier's
/// technique ladder, and accepts the result if the accumulated score falls
/// into the tier's band; otherwise the whole cycle restarts with a new
/// board. The [`Difficulty::Random`] tier reduces with the full ladder and
/// accepts the first result.
///
/// Generation is synchronous and can block for a noticeable time; callers
/// with an interactive thread are expected to run it on a worker.
///
/// # Examples
///
/// ```
/// use nonagrid_generator::{PuzzleGenerator, Seed};
/// use nonagrid_solver::Difficulty;
///
/// let generator = PuzzleGenerator::new(Difficulty::Random);
/// let puzzle = generator.generate_with_seed(Seed::from_value(1)).unwrap();
/// assert_eq!(puzzle.solution.filled_count(), 81);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
    solver: TechniqueSolver,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty tier.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            solver: TechniqueSolver::for_difficulty(difficulty),
        }
    }

    /// Returns the difficulty tier this generator produces.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from operating-system entropy.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(Seed::from_entropy())
    }

    /// Generates a puzzle deterministically from a seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Timeout`] if a board fill exceeds its step
    /// budget, or [`GenerateError::DifficultyUnreachable`] if no attempt
    /// within [`MAX_ATTEMPTS`] lands in the requested score band.
    pub fn generate_with_seed(&self, seed: Seed) -> Result<GeneratedPuzzle, GenerateError> {
        let start = Instant::now();
        let mut rng = seed.rng();
        let reducer = PuzzleReducer::new(&self.solver);

        for attempt in 1..=MAX_ATTEMPTS {
            debug!("generating board, attempt {attempt}");
            let solution = filler::fill_board(&mut rng)?;
            let mut problem = solution.clone();
            let stats = reducer.reduce(&mut problem, &mut rng)?;

            let score = stats.score();
            if classify::matches_band(self.difficulty, score) {
                debug!(
                    "{} puzzle ready after {attempt} attempt(s), score {score}, {} clues",
                    self.difficulty,
                    problem.filled_count()
                );
                return Ok(GeneratedPuzzle {
                    problem,
                    solution,
                    score,
                    elapsed: start.elapsed(),
                    seed,
                });
            }
            debug!(
                "attempt {attempt} scored {score}, outside the {} band",
                self.difficulty
            );
        }

        Err(GenerateError::DifficultyUnreachable {
            difficulty: self.difficulty,
            attempts: MAX_ATTEMPTS,
        })
    }
}
