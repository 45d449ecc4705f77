use log::trace;
use nonagrid_core::{Grid, Position};
use rand::{Rng, seq::SliceRandom as _};

use nonagrid_solver::{SolveStats, TechniqueSolver};

use crate::GenerateError;

/// Strips cells from a full grid while it stays solvable.
///
/// The reducer visits all 81 positions in a uniformly shuffled order. Each
/// visit removes the cell's digit, refreshes the candidate sets around it,
/// and probes a clone of the grid with the configured solver; if the clone
/// cannot be finished, the digit is restored and the candidates refreshed
/// again. A removal that survives is final.
///
/// The solver must be gated to the difficulty tier the puzzle is meant for,
/// since it decides which removals are acceptable.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleReducer<'a> {
    solver: &'a TechniqueSolver,
}

impl<'a> PuzzleReducer<'a> {
    /// Creates a reducer that probes solvability with the given solver.
    #[must_use]
    pub const fn new(solver: &'a TechniqueSolver) -> Self {
        Self { solver }
    }

    /// Reduces a full grid in place to a playable puzzle.
    ///
    /// On return every still-filled cell is marked as a given clue and
    /// every empty cell as user-fillable. The returned stats come from the
    /// last successful probe, which by construction solved exactly the
    /// final reduced grid.
    ///
    /// # Errors
    ///
    /// Returns an error if a solvability probe reports an unsolvable state,
    /// which cannot happen for grids produced by
    /// [`fill_board`](crate::fill_board).
    pub fn reduce<R>(&self, grid: &mut Grid, rng: &mut R) -> Result<SolveStats, GenerateError>
    where
        R: Rng + ?Sized,
    {
        grid.compute_all_candidates();

        let mut order = Position::ALL;
        order.shuffle(rng);

        let mut last_success: Option<SolveStats> = None;
        for pos in order {
            let Some(removed) = grid.digit(pos) else {
                continue;
            };
            grid.set_digit(pos, None);
            grid.refresh_candidates_around(pos);

            let mut trial = grid.clone();
            let (solved, stats) = self.solver.solve(&mut trial)?;
            if solved {
                trace!("removed {removed} at {pos}, score {}", stats.score());
                last_success = Some(stats);
            } else {
                trace!("kept {removed} at {pos}");
                grid.set_digit(pos, Some(removed));
                grid.refresh_candidates_around(pos);
            }
        }

        grid.fix_filled_cells();
        // The first removal always survives (the cleared cell is a naked
        // single), so a missing last probe means nothing was removable.
        Ok(last_success.unwrap_or_default())
    }
}
