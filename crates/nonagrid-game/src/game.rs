use derive_more::{Display, Error, From};
use log::debug;
use nonagrid_core::{Cell, Digit, Grid, ParseGridError, Position};
use nonagrid_generator::GeneratedPuzzle;
use nonagrid_solver::{SolverError, TechniqueSolver};

/// Error returned when a gameplay operation is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is a given clue and cannot be modified.
    #[display("cell at {position} is a given clue")]
    FixedCell {
        /// The targeted cell.
        position: Position,
    },
}

/// Error returned when importing a puzzle from its exchange form fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum ImportError {
    /// The string is not a well-formed 81-cell grid.
    #[display("malformed grid string: {_0}")]
    #[from]
    Malformed(ParseGridError),
    /// The grid breaks the one-per-row/column/box rule.
    #[display("grid violates the one-per-house rule at {position}")]
    RuleViolation {
        /// The first conflicting cell.
        position: Position,
    },
}

/// A Sudoku game session.
///
/// A game pairs the playable board with the solution it was reduced from,
/// so revealing the solution and flagging wrong guesses are lookups rather
/// than solver runs. Clue cells are fixed and guarded against modification;
/// everything else accepts free user input, including input that breaks the
/// rules (wrong guesses are the user's to make and the game's to report).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Grid,
    solution: Option<Grid>,
}

impl Game {
    /// Creates a game from a generated puzzle.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem, solution, ..
        } = puzzle;
        Self {
            board: problem,
            solution: Some(solution),
        }
    }

    /// Imports a game from the 81-character exchange form.
    ///
    /// Filled cells become given clues. The import is rejected if the
    /// string is malformed or the grid already breaks the one-per-house
    /// rule. A solution reference is derived by running the full technique
    /// ladder once; if the ladder cannot finish the board, the game keeps
    /// playing without one.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Malformed`] or [`ImportError::RuleViolation`].
    pub fn from_transfer(s: &str) -> Result<Self, ImportError> {
        let mut board: Grid = s.parse()?;
        if let Some(position) = board.first_conflict() {
            return Err(ImportError::RuleViolation { position });
        }
        board.fix_filled_cells();
        board.compute_all_candidates();

        let mut probe = board.clone();
        let solution = match TechniqueSolver::with_all_techniques().solve(&mut probe) {
            Ok((true, _)) => Some(probe),
            Ok((false, _)) | Err(_) => None,
        };
        debug!(
            "imported board with {} clues, solution reference {}",
            board.filled_count(),
            if solution.is_some() { "derived" } else { "unavailable" },
        );
        Ok(Self { board, solution })
    }

    /// Returns the playable board.
    #[must_use]
    pub const fn board(&self) -> &Grid {
        &self.board
    }

    /// Returns the cell at a position, for rendering.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> &Cell {
        self.board.cell(pos)
    }

    /// Returns the retained solution grid, if one exists.
    #[must_use]
    pub const fn solution(&self) -> Option<&Grid> {
        self.solution.as_ref()
    }

    /// Enters a digit into a user-fillable cell.
    ///
    /// The digit is accepted even if it conflicts with a peer; use
    /// [`wrong_guesses`](Self::wrong_guesses) to report mistakes.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::FixedCell`] if the cell is a given clue.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        self.write_cell(pos, Some(digit))
    }

    /// Clears a user-fillable cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::FixedCell`] if the cell is a given clue.
    pub fn clear_digit(&mut self, pos: Position) -> Result<(), GameError> {
        self.write_cell(pos, None)
    }

    fn write_cell(&mut self, pos: Position, digit: Option<Digit>) -> Result<(), GameError> {
        if self.board.cell(pos).is_fixed() {
            return Err(GameError::FixedCell { position: pos });
        }
        self.board.set_digit(pos, digit);
        self.board.refresh_candidates_around(pos);
        Ok(())
    }

    /// Clears every user-fillable cell, returning the board to its clues.
    pub fn reset(&mut self) {
        for pos in Position::ALL {
            if !self.board.cell(pos).is_fixed() {
                self.board.set_digit(pos, None);
            }
        }
        self.board.compute_all_candidates();
    }

    /// Fills the board with the solution.
    ///
    /// With a solution reference, every user-fillable cell that disagrees
    /// with it is overwritten. Without one, the full technique ladder runs
    /// on the board itself, which may stop short of finishing.
    ///
    /// # Returns
    ///
    /// `true` if the board ended up full.
    ///
    /// # Errors
    ///
    /// The fallback ladder reports an error if existing entries make the
    /// board unsolvable.
    pub fn reveal_solution(&mut self) -> Result<bool, SolverError> {
        match &self.solution {
            Some(solution) => {
                for pos in Position::ALL {
                    let cell = self.board.cell(pos);
                    if !cell.is_fixed() && cell.digit() != solution.digit(pos) {
                        self.board.set_digit(pos, solution.digit(pos));
                    }
                }
                Ok(true)
            }
            None => {
                let (solved, _) = TechniqueSolver::with_all_techniques().solve(&mut self.board)?;
                Ok(solved)
            }
        }
    }

    /// Returns the positions of wrong guesses: user-filled cells whose
    /// digit disagrees with the solution reference.
    ///
    /// Without a solution reference no cells are flagged.
    #[must_use]
    pub fn wrong_guesses(&self) -> Vec<Position> {
        let Some(solution) = &self.solution else {
            return Vec::new();
        };
        Position::ALL
            .into_iter()
            .filter(|&pos| {
                let cell = self.board.cell(pos);
                !cell.is_fixed() && cell.digit().is_some() && cell.digit() != solution.digit(pos)
            })
            .collect()
    }

    /// Returns `true` if the board is full and breaks no rule.
    ///
    /// Any valid completion counts, not just the retained solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_full() && self.board.first_conflict().is_none()
    }
}
