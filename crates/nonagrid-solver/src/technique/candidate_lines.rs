use nonagrid_core::{Digit, Grid, Position};

use crate::{
    SolveStats, SolverError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Candidate Lines";

/// Weight added to the difficulty score per box that produced eliminations.
const WEIGHT: u32 = 9;

/// A technique that eliminates candidates along a box's pointing line.
///
/// Within a 3x3 box, when every remaining candidate position of a digit
/// lies in a single row (or a single column), the digit must be placed on
/// that line inside the box, so it is removed from the rest of the row (or
/// column) outside the box.
#[derive(Debug, Default, Clone, Copy)]
pub struct CandidateLines {}

impl CandidateLines {
    /// Creates a new `CandidateLines` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Applies pointing-line eliminations for a single box.
    ///
    /// Returns `true` if any candidate outside the box was removed.
    fn eliminate_in_box(grid: &mut Grid, box_index: u8) -> bool {
        let mut changed = false;
        for digit in Digit::ALL {
            let mut rows: u16 = 0;
            let mut columns: u16 = 0;
            for pos in Position::BOXES[box_index as usize] {
                if grid.cell(pos).is_empty() && grid.candidates(pos).contains(digit) {
                    rows |= 1 << pos.y();
                    columns |= 1 << pos.x();
                }
            }
            if rows == 0 {
                continue;
            }
            if rows.count_ones() == 1 {
                #[expect(clippy::cast_possible_truncation)]
                let y = rows.trailing_zeros() as u8;
                for pos in Position::ROWS[y as usize] {
                    if pos.box_index() != box_index {
                        changed |= grid.remove_candidate(pos, digit);
                    }
                }
            }
            if columns.count_ones() == 1 {
                #[expect(clippy::cast_possible_truncation)]
                let x = columns.trailing_zeros() as u8;
                for pos in Position::COLUMNS[x as usize] {
                    if pos.box_index() != box_index {
                        changed |= grid.remove_candidate(pos, digit);
                    }
                }
            }
        }
        changed
    }
}

impl Technique for CandidateLines {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid, stats: &mut SolveStats) -> Result<bool, SolverError> {
        let mut changed = false;
        for box_index in 0..9 {
            if Self::eliminate_in_box(grid, box_index) {
                stats.add_score(WEIGHT);
                changed = true;
            }
        }
        Ok(changed)
    }
}
