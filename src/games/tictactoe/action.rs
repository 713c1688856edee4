//! Move rejection reasons for tic-tac-toe.

use super::position::Cell;

/// Error returned when a placement is refused.
///
/// A refused move never mutates the board or the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell lies outside the board.
    #[display("Cell {} is outside the {}x{} board", _0, _1, _1)]
    OutOfBounds(Cell, usize),

    /// The square at the cell is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Cell),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
