//! The 81-cell Sudoku board.

use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet, position::Position};

/// Error returned when parsing a grid from its exchange form fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {len}")]
    WrongLength {
        /// Number of cell characters found.
        len: usize,
    },
    /// The input contained a character that is not a digit or empty marker.
    #[display("invalid character {ch:?} in grid string")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}

/// A 9x9 Sudoku board.
///
/// The board owns a flat array of 81 [`Cell`]s in row-major order. Cloning a
/// grid deep-copies every cell, so a trial clone never aliases the grid it
/// was cloned from.
///
/// Candidate maintenance is part of the grid: [`compute_all_candidates`]
/// recomputes every cell from scratch, [`refresh_candidates_around`]
/// recomputes the neighborhood of a changed cell, and
/// [`retract_candidate_from_peers`] removes a just-placed digit from its
/// peers' candidate sets.
///
/// [`compute_all_candidates`]: Grid::compute_all_candidates
/// [`refresh_candidates_around`]: Grid::refresh_candidates_around
/// [`retract_candidate_from_peers`]: Grid::retract_candidate_from_peers
///
/// # Exchange form
///
/// [`Display`] renders the canonical exchange form: 81 characters, row-major,
/// `'1'`-`'9'` for filled cells and `'0'` for empty ones. [`FromStr`] accepts
/// that form, treating `'.'` and `'_'` as empty as well and ignoring
/// whitespace.
///
/// # Examples
///
/// ```
/// use nonagrid_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// grid.set_digit(Position::new(0, 0), Some(Digit::D5));
///
/// let encoded = grid.to_string();
/// assert_eq!(encoded.len(), 81);
/// assert_eq!(encoded.parse::<Grid>().unwrap(), grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid with no candidates computed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::new(); 81],
        }
    }

    /// Returns the cell at a position.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index() as usize]
    }

    const fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.index() as usize]
    }

    /// Returns the digit at a position, or `None` if the cell is empty.
    #[must_use]
    pub const fn digit(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).digit()
    }

    /// Sets or clears the digit at a position.
    ///
    /// Assigning a digit clears that cell's own candidate set; propagating
    /// the change to peers is the caller's responsibility (see
    /// [`retract_candidate_from_peers`] and [`refresh_candidates_around`]).
    ///
    /// [`retract_candidate_from_peers`]: Grid::retract_candidate_from_peers
    /// [`refresh_candidates_around`]: Grid::refresh_candidates_around
    pub const fn set_digit(&mut self, pos: Position, digit: Option<Digit>) {
        self.cell_mut(pos).set_digit(digit);
    }

    /// Returns the candidate set at a position. Empty for filled cells.
    #[must_use]
    pub const fn candidates(&self, pos: Position) -> DigitSet {
        self.cell(pos).candidates()
    }

    /// Replaces the candidate set at a position.
    pub const fn set_candidates(&mut self, pos: Position, candidates: DigitSet) {
        self.cell_mut(pos).set_candidates(candidates);
    }

    /// Removes a candidate at a position, returning `true` if it was present.
    pub const fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.cell_mut(pos).remove_candidate(digit)
    }

    /// Marks or unmarks the cell at a position as a given clue.
    pub const fn set_fixed(&mut self, pos: Position, fixed: bool) {
        self.cell_mut(pos).set_fixed(fixed);
    }

    /// Marks every filled cell as a given clue and every empty cell as
    /// user-fillable.
    pub fn fix_filled_cells(&mut self) {
        for cell in &mut self.cells {
            cell.set_fixed(!cell.is_empty());
        }
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Returns `true` if the digit at `pos`, if any, does not duplicate any
    /// peer in its row, column, or box. Empty cells are always valid.
    #[must_use]
    pub fn is_valid(&self, pos: Position) -> bool {
        let Some(digit) = self.digit(pos) else {
            return true;
        };
        pos.peers().all(|peer| self.digit(peer) != Some(digit))
    }

    /// Returns the first position whose digit conflicts with a peer, if any.
    #[must_use]
    pub fn first_conflict(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| !self.is_valid(pos))
    }

    /// Returns `true` if all 81 cells are filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns `true` if no cell is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Computes the digits that may legally be placed at a position: all
    /// digits 1-9 minus every digit already present among the cell's 20
    /// peers. Returns the empty set if the cell is already filled.
    #[must_use]
    pub fn allowed_digits(&self, pos: Position) -> DigitSet {
        if !self.cell(pos).is_empty() {
            return DigitSet::EMPTY;
        }
        let mut used = DigitSet::EMPTY;
        for peer in pos.peers() {
            if let Some(digit) = self.digit(peer) {
                used.insert(digit);
            }
        }
        !used
    }

    /// Recomputes and stores the candidate set of every cell.
    ///
    /// Used once before solving starts on a freshly reduced or cloned grid;
    /// afterwards the localized operations keep the sets consistent.
    pub fn compute_all_candidates(&mut self) {
        for pos in Position::ALL {
            let allowed = self.allowed_digits(pos);
            self.set_candidates(pos, allowed);
        }
    }

    /// Recomputes the candidate sets of every cell in the row, column, and
    /// box of `pos`, including `pos` itself.
    ///
    /// Used after a digit is placed at or removed from `pos` so that the
    /// neighborhood's candidate sets stay consistent.
    pub fn refresh_candidates_around(&mut self, pos: Position) {
        for i in 0..9 {
            for refreshed in [
                Position::ROWS[pos.y() as usize][i],
                Position::COLUMNS[pos.x() as usize][i],
                Position::BOXES[pos.box_index() as usize][i],
            ] {
                let allowed = self.allowed_digits(refreshed);
                self.set_candidates(refreshed, allowed);
            }
        }
    }

    /// Removes `digit` from the candidate set of every peer of `pos`.
    ///
    /// This is the cheap propagation step that must follow every placement;
    /// a stale candidate set would let later deductions place conflicting
    /// digits.
    pub fn retract_candidate_from_peers(&mut self, pos: Position, digit: Digit) {
        for peer in pos.peers() {
            self.remove_candidate(peer, digit);
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::ALL {
            match self.digit(pos) {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_char('0')?,
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut len = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let digit = match ch {
                '0' | '.' | '_' => None,
                '1'..='9' => Digit::try_from_value(ch as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter { ch }),
            };
            if len >= 81 {
                // Count the rest so the error reports the actual length.
                len += 1;
                continue;
            }
            #[expect(clippy::cast_possible_truncation)]
            grid.set_digit(Position::from_index(len as u8), digit);
            len += 1;
        }
        if len != 81 {
            return Err(ParseGridError::WrongLength { len });
        }
        Ok(grid)
    }
}
