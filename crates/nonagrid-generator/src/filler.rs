use nonagrid_core::{Digit, DigitSet, Grid, Position};
use rand::{Rng, RngExt};

use crate::GenerateError;

/// Maximum number of cells the backtracking fill may visit before giving up.
///
/// A fill of an empty grid needs a few hundred visits on average; the budget
/// exists so a pathological run fails loudly instead of spinning.
pub const FILL_STEP_BUDGET: u64 = 2_000_000;

/// Fills an empty grid completely with a valid random assignment.
///
/// Positions are visited in row-major order. At each cell the remaining
/// legal digits form a trial set; a uniformly random member is placed and
/// the fill recurses, discarding the digit from the trial set when the
/// recursion fails and backtracking once the set is exhausted. The
/// randomized choice is what makes every generated board different, and an
/// injected RNG makes runs reproducible.
///
/// # Errors
///
/// Returns [`GenerateError::Timeout`] if the fill visits more than
/// [`FILL_STEP_BUDGET`] cells.
pub fn fill_board<R>(rng: &mut R) -> Result<Grid, GenerateError>
where
    R: Rng + ?Sized,
{
    let mut grid = Grid::new();
    let mut steps = 0_u64;
    let filled = fill_from(&mut grid, 0, rng, &mut steps)?;
    debug_assert!(filled, "an empty grid always admits a complete assignment");
    Ok(grid)
}

fn fill_from<R>(
    grid: &mut Grid,
    index: u8,
    rng: &mut R,
    steps: &mut u64,
) -> Result<bool, GenerateError>
where
    R: Rng + ?Sized,
{
    if index == 81 {
        return Ok(true);
    }
    *steps += 1;
    if *steps > FILL_STEP_BUDGET {
        return Err(GenerateError::Timeout {
            budget: FILL_STEP_BUDGET,
        });
    }

    let pos = Position::from_index(index);
    let mut trial = grid.allowed_digits(pos);
    while let Some(digit) = pick_random(trial, rng) {
        grid.set_digit(pos, Some(digit));
        if grid.is_valid(pos) && fill_from(grid, index + 1, rng, steps)? {
            return Ok(true);
        }
        trial.remove(digit);
    }

    // Every candidate failed further down; undo and report to the caller.
    grid.set_digit(pos, None);
    Ok(false)
}

fn pick_random<R>(set: DigitSet, rng: &mut R) -> Option<Digit>
where
    R: Rng + ?Sized,
{
    if set.is_empty() {
        return None;
    }
    let choice = rng.random_range(0..set.len());
    set.iter().nth(choice)
}
