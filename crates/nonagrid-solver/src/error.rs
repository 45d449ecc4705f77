use derive_more::{Display, Error};
use nonagrid_core::Position;

/// Error returned when solving detects an unsolvable grid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// An empty cell has no remaining candidate, so no assignment can
    /// complete the grid.
    #[display("no candidate remains for the empty cell at {position}")]
    Contradiction {
        /// The cell with an exhausted candidate set.
        position: Position,
    },
}
