//! Test harness for technique implementations.

use nonagrid_core::{Digit, Grid, Position};

use crate::{SolveStats, technique::Technique};

/// A fluent harness for verifying technique behavior.
///
/// The tester keeps the initial grid (with candidates computed) next to the
/// current one, so assertions can compare candidate sets before and after a
/// technique ran. All assertion methods panic with the failing position in
/// the message.
#[derive(Debug)]
pub struct TechniqueTester {
    initial: Grid,
    current: Grid,
    stats: SolveStats,
}

impl TechniqueTester {
    /// Creates a tester from a grid string, computing all candidates.
    ///
    /// The string format matches [`Grid::from_str`](std::str::FromStr):
    /// digits for filled cells, `.`, `_`, or `0` for empty cells, whitespace
    /// ignored.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let mut grid: Grid = s.parse().unwrap();
        grid.compute_all_candidates();
        Self {
            initial: grid.clone(),
            current: grid,
            stats: SolveStats::default(),
        }
    }

    /// Returns mutable access to the current grid for bespoke setup or
    /// direct technique calls.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    /// Consumes the tester and returns the accumulated stats.
    #[must_use]
    pub fn into_stats(self) -> SolveStats {
        self.stats
    }

    /// Applies the technique once.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        technique.apply(&mut self.current, &mut self.stats).unwrap();
        self
    }

    /// Applies the technique repeatedly until it makes no more progress.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    #[expect(dead_code)]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while technique.apply(&mut self.current, &mut self.stats).unwrap() {}
        self
    }

    /// Asserts that a digit has been placed at a position.
    #[track_caller]
    pub fn assert_placed(self, pos: Position, digit: Digit) -> Self {
        assert_eq!(
            self.current.digit(pos),
            Some(digit),
            "expected {digit} to be placed at {pos}"
        );
        self
    }

    /// Asserts that each listed digit was removed from a cell's candidates.
    #[track_caller]
    pub fn assert_removed_includes<I>(self, pos: Position, digits: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        for digit in digits {
            assert!(
                self.initial.candidates(pos).contains(digit),
                "{digit} was not a candidate at {pos} to begin with"
            );
            assert!(
                !self.current.candidates(pos).contains(digit),
                "expected {digit} to be removed from candidates at {pos}"
            );
        }
        self
    }

    /// Asserts that a cell's value and candidates are unchanged.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        assert_eq!(
            self.initial.digit(pos),
            self.current.digit(pos),
            "value at {pos} changed"
        );
        assert_eq!(
            self.initial.candidates(pos),
            self.current.candidates(pos),
            "candidates at {pos} changed"
        );
        self
    }
}
