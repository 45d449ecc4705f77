use nonagrid_core::Grid;

use crate::{
    Difficulty, SolverError,
    technique::{self, BoxedTechnique},
};

/// Statistics collected during technique-based solving.
///
/// The weighted difficulty score only ever grows: every successful technique
/// application adds that technique's fixed weight. Per-technique application
/// counts are tracked in solver order.
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    score: u32,
    applications: Vec<usize>,
}

impl SolveStats {
    /// Returns the accumulated difficulty score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns technique application counts in solver order.
    ///
    /// Empty when the stats were not produced by a [`TechniqueSolver`].
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns `true` if any technique was applied at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.score > 0
    }

    /// Adds difficulty weight for a successful technique application.
    ///
    /// Called by [`Technique::apply`](crate::technique::Technique::apply)
    /// implementations.
    pub fn add_score(&mut self, weight: u32) {
        self.score += weight;
    }
}

/// A solver that applies human-like deduction techniques to a grid.
///
/// The solver holds an ordered ladder of techniques and repeats passes over
/// it: each pass tries every technique in priority order, and solving stops
/// when the grid is full or a whole pass changes nothing. No guessing is
/// ever performed, so a grid that the ladder cannot finish is reported as
/// unsolved rather than searched.
///
/// # Examples
///
/// ```
/// use nonagrid_core::Grid;
/// use nonagrid_solver::{Difficulty, TechniqueSolver};
///
/// let solver = TechniqueSolver::for_difficulty(Difficulty::Medium);
/// let mut grid = Grid::new();
/// let (solved, stats) = solver.solve(&mut grid)?;
/// assert!(!solved); // an empty grid offers no deductions
/// assert_eq!(stats.score(), 0);
/// # Ok::<(), nonagrid_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TechniqueSolver {
    techniques: Vec<BoxedTechnique>,
}

impl TechniqueSolver {
    /// Creates a new solver with the specified techniques.
    ///
    /// Techniques are tried in the order they appear in the vector.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver with the technique set enabled for a difficulty
    /// tier.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.technique_set())
    }

    /// Creates a solver with the full technique ladder.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(technique::all_techniques())
    }

    /// Returns the configured techniques in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`SolveStats::applications`].
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Creates a statistics object aligned with this solver's technique
    /// order.
    #[must_use]
    pub fn new_stats(&self) -> SolveStats {
        SolveStats {
            score: 0,
            applications: vec![0; self.techniques.len()],
        }
    }

    /// Runs one pass over the ladder, applying each technique in order.
    ///
    /// `stats` must have been created by [`new_stats`](Self::new_stats) so
    /// its application counters line up with this solver's ladder.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if any technique changed the grid during this pass.
    ///
    /// # Errors
    ///
    /// Returns an error if a technique detects an unsolvable grid state.
    pub fn pass(&self, grid: &mut Grid, stats: &mut SolveStats) -> Result<bool, SolverError> {
        debug_assert_eq!(self.techniques.len(), stats.applications.len());
        let mut changed = false;
        for (i, technique) in self.techniques.iter().enumerate() {
            if technique.apply(grid, stats)? {
                stats.applications[i] += 1;
                changed = true;
            }
            if grid.is_full() {
                break;
            }
        }
        Ok(changed)
    }

    /// Solves the grid as far as the ladder allows.
    ///
    /// The grid's candidate sets are recomputed from its values before the
    /// first pass, so callers only need the values to be in place. Passes
    /// repeat while they make progress and the grid is not yet full.
    ///
    /// # Returns
    ///
    /// `(solved, stats)` where `solved` is `true` if the grid ended up full.
    ///
    /// # Errors
    ///
    /// Returns an error if a technique detects an unsolvable grid state.
    pub fn solve(&self, grid: &mut Grid) -> Result<(bool, SolveStats), SolverError> {
        let mut stats = self.new_stats();
        grid.compute_all_candidates();
        while !grid.is_full() {
            if !self.pass(grid, &mut stats)? {
                break;
            }
        }
        Ok((grid.is_full(), stats))
    }
}

#[cfg(test)]
mod tests {
    use nonagrid_core::{Digit, Position};

    use super::*;
    use crate::technique::{HiddenSingle, NakedSingle};

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn singles_solver() -> TechniqueSolver {
        TechniqueSolver::new(vec![
            Box::new(NakedSingle::new()),
            Box::new(HiddenSingle::new()),
        ])
    }

    #[test]
    fn test_solve_is_idempotent_on_solved_grid() {
        let solver = TechniqueSolver::with_all_techniques();
        let mut grid: Grid = SOLVED.parse().unwrap();
        let before = grid.clone();

        let (solved, stats) = solver.solve(&mut grid).unwrap();
        assert!(solved);
        assert_eq!(stats.score(), 0);
        assert!(!stats.has_progress());
        assert_eq!(grid.to_string(), before.to_string());
    }

    #[test]
    fn test_solve_fills_missing_singles() {
        let mut grid: Grid = SOLVED.parse().unwrap();
        for pos in [Position::new(0, 0), Position::new(4, 4), Position::new(8, 8)] {
            grid.set_digit(pos, None);
        }

        let (solved, stats) = singles_solver().solve(&mut grid).unwrap();
        assert!(solved);
        assert_eq!(grid.to_string(), SOLVED);
        assert_eq!(stats.score(), 3);
        assert_eq!(stats.applications()[0], 1);
    }

    #[test]
    fn test_solve_reports_stuck_grid() {
        let solver = singles_solver();
        let mut grid = Grid::new();
        let (solved, stats) = solver.solve(&mut grid).unwrap();
        assert!(!solved);
        assert_eq!(stats.score(), 0);
    }

    #[test]
    fn test_score_accumulates_across_passes() {
        // Solving the same grid twice in a row cannot decrease the score:
        // the second run starts from the solved state and adds zero.
        let mut grid: Grid = SOLVED.parse().unwrap();
        grid.set_digit(Position::new(0, 0), None);

        let solver = singles_solver();
        let (_, first) = solver.solve(&mut grid).unwrap();
        let (_, second) = solver.solve(&mut grid).unwrap();
        assert!(first.score() >= 1);
        assert_eq!(second.score(), 0);
    }

    #[test]
    fn test_new_stats_matches_ladder() {
        let solver = TechniqueSolver::with_all_techniques();
        let stats = solver.new_stats();
        assert_eq!(stats.applications().len(), solver.techniques().len());
        assert_eq!(stats.score(), 0);
    }

    #[test]
    fn test_stuck_cell_digit_unchanged() {
        // A grid whose empty cell candidates are ambiguous stays untouched.
        let mut grid = Grid::new();
        grid.set_digit(Position::new(0, 0), Some(Digit::D1));
        let (solved, _) = singles_solver().solve(&mut grid).unwrap();
        assert!(!solved);
        assert_eq!(grid.digit(Position::new(0, 0)), Some(Digit::D1));
        assert_eq!(grid.filled_count(), 1);
    }
}
