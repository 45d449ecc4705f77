use nonagrid_core::{Digit, Grid, Position};

use crate::{
    SolveStats, SolverError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Hidden Single";

/// Weight added to the difficulty score per placed digit.
const WEIGHT: u32 = 1;

/// A technique that places digits with only one legal position in their box.
///
/// For an empty cell and one of its candidate digits, the digit is checked
/// against the two other rows of the cell's horizontal band and the two
/// other columns of its vertical band. When the digit is already placed in
/// all four of those lines, every other cell of this cell's box is blocked,
/// so the digit can only go here. Each placement is followed by retracting
/// the placed digit from all peers.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle {}

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Returns the two other line indices of the 3-line band containing `i`.
    const fn band_siblings(i: u8) -> [u8; 2] {
        let base = i - i % 3;
        match i % 3 {
            0 => [base + 1, base + 2],
            1 => [base, base + 2],
            _ => [base, base + 1],
        }
    }

    fn digit_in_row(grid: &Grid, digit: Digit, y: u8) -> bool {
        Position::ROWS[y as usize]
            .iter()
            .any(|&pos| grid.digit(pos) == Some(digit))
    }

    fn digit_in_column(grid: &Grid, digit: Digit, x: u8) -> bool {
        Position::COLUMNS[x as usize]
            .iter()
            .any(|&pos| grid.digit(pos) == Some(digit))
    }

    fn is_single_position(grid: &Grid, pos: Position, digit: Digit) -> bool {
        let [r1, r2] = Self::band_siblings(pos.y());
        let [c1, c2] = Self::band_siblings(pos.x());
        Self::digit_in_row(grid, digit, r1)
            && Self::digit_in_row(grid, digit, r2)
            && Self::digit_in_column(grid, digit, c1)
            && Self::digit_in_column(grid, digit, c2)
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid, stats: &mut SolveStats) -> Result<bool, SolverError> {
        let mut changed = false;
        loop {
            let mut progressed = false;
            for pos in Position::ALL {
                if !grid.cell(pos).is_empty() {
                    continue;
                }
                for digit in grid.candidates(pos) {
                    if Self::is_single_position(grid, pos, digit) {
                        grid.set_digit(pos, Some(digit));
                        grid.retract_candidate_from_peers(pos, digit);
                        stats.add_score(WEIGHT);
                        progressed = true;
                        changed = true;
                        break;
                    }
                }
            }
            if !progressed {
                break;
            }
        }
        Ok(changed)
    }
}
