//! Core data structures for the nonagrid Sudoku engine.
//!
//! This crate provides the board representation shared by the solving,
//! generation, and game components:
//!
//! - [`digit`]: type-safe Sudoku digits 1-9
//! - [`digit_set`]: a 9-bit candidate mask over digits 1-9
//! - [`position`]: board coordinates with row-major indexing
//! - [`cell`]: a single board cell (value, candidates, fixed flag)
//! - [`grid`]: the 81-cell board with candidate maintenance and the
//!   81-character exchange form
//!
//! # Examples
//!
//! ```
//! use nonagrid_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set_digit(Position::new(4, 4), Some(Digit::D5));
//!
//! // The placed digit is no longer allowed anywhere in its row.
//! assert!(!grid.allowed_digits(Position::new(0, 4)).contains(Digit::D5));
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    position::Position,
};
