use nonagrid_core::{Grid, Position};
use tinyvec::ArrayVec;

use crate::{
    SolveStats, SolverError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Naked Pair";

/// Weight added to the difficulty score per line that produced eliminations.
const WEIGHT: u32 = 9;

/// A technique that eliminates candidates using naked pairs in rows and
/// columns.
///
/// When exactly two cells of a line share an identical two-digit candidate
/// set, those two digits are spoken for and can be removed from every other
/// cell of the line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedPair {}

impl NakedPair {
    /// Creates a new `NakedPair` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Applies naked-pair eliminations within one line of 9 cells.
    ///
    /// Returns `true` if any candidate was removed.
    fn eliminate_in_line(grid: &mut Grid, line: &[Position; 9]) -> bool {
        let mut pair_cells: ArrayVec<[u8; 9]> = ArrayVec::new();
        for (i, &pos) in (0u8..).zip(line) {
            if grid.cell(pos).is_empty() && grid.candidates(pos).len() == 2 {
                pair_cells.push(i);
            }
        }

        let mut changed = false;
        for (i, &a) in pair_cells.iter().enumerate() {
            let pair = grid.candidates(line[a as usize]);
            for &b in &pair_cells[i + 1..] {
                if grid.candidates(line[b as usize]) != pair {
                    continue;
                }
                for (k, &pos) in (0u8..).zip(line) {
                    if k == a || k == b {
                        continue;
                    }
                    for digit in pair {
                        changed |= grid.remove_candidate(pos, digit);
                    }
                }
            }
        }
        changed
    }
}

impl Technique for NakedPair {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid, stats: &mut SolveStats) -> Result<bool, SolverError> {
        let mut changed = false;
        for i in 0..9 {
            if Self::eliminate_in_line(grid, &Position::ROWS[i]) {
                stats.add_score(WEIGHT);
                changed = true;
            }
            if Self::eliminate_in_line(grid, &Position::COLUMNS[i]) {
                stats.add_score(WEIGHT);
                changed = true;
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use nonagrid_core::{Digit, DigitSet};

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_preset_board_naked_pair_in_row() {
        // Row 8 holds the pair {1, 5} at columns 1 and 6; the remaining
        // empty cells of the row lose both digits.
        let mut tester = TechniqueTester::from_str(
            "
            400270600
            798156234
            020840007
            237468951
            849531726
            561792843
            082015479
            070024300
            004087002
        ",
        );
        let grid = tester.grid_mut();
        assert_eq!(
            grid.candidates(Position::new(1, 8)),
            DigitSet::from_iter([Digit::D1, Digit::D5])
        );
        assert_eq!(
            grid.candidates(Position::new(6, 8)),
            DigitSet::from_iter([Digit::D1, Digit::D5])
        );
        assert_eq!(
            grid.candidates(Position::new(0, 8)),
            DigitSet::from_iter([Digit::D1, Digit::D3, Digit::D6, Digit::D9])
        );

        let changed = NakedPair::eliminate_in_line(grid, &Position::ROWS[8]);
        assert!(changed);
        assert_eq!(
            grid.candidates(Position::new(0, 8)),
            DigitSet::from_iter([Digit::D3, Digit::D6, Digit::D9])
        );
        // (7, 8) collapses from {1, 6} to a single candidate.
        assert_eq!(
            grid.candidates(Position::new(7, 8)),
            DigitSet::from_iter([Digit::D6])
        );
        // The pair cells themselves keep their candidates.
        assert_eq!(
            grid.candidates(Position::new(1, 8)),
            DigitSet::from_iter([Digit::D1, Digit::D5])
        );
    }

    #[test]
    fn test_returns_false_without_matching_pair() {
        let mut tester = TechniqueTester::from_str(
            "
            _________
            _________
            _________
            _________
            _________
            _________
            _________
            _________
            _________
        ",
        );
        let changed = NakedPair::eliminate_in_line(tester.grid_mut(), &Position::ROWS[0]);
        assert!(!changed);
    }

    #[test]
    fn test_no_change_on_fresh_grid() {
        TechniqueTester::from_str(
            "
            _________
            _________
            _________
            _________
            _________
            _________
            _________
            _________
            _________
        ",
        )
        .apply_once(&NakedPair::new())
        .assert_no_change(Position::new(0, 0))
        .assert_no_change(Position::new(4, 4));
    }
}
