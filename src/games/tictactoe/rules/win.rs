//! Win detection logic for tic-tac-toe.
//!
//! A line wins when every square on it belongs to the same player. The
//! winning length always equals the board size, so an `N`x`N` board has
//! exactly `2N + 2` candidate lines.

use super::super::{Board, Cell, Player, Square};
use tracing::instrument;

/// Every candidate line on a board of side `size`.
///
/// Lines come in evaluation order: rows top to bottom, columns left to
/// right, the downward diagonal, then the upward diagonal.
pub fn lines(size: usize) -> Vec<Vec<Cell>> {
    let mut lines = Vec::with_capacity(2 * size + 2);
    for row in 0..size {
        lines.push((0..size).map(|col| Cell::new(col, row)).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| Cell::new(col, row)).collect());
    }
    lines.push((0..size).map(|i| Cell::new(i, i)).collect());
    lines.push((0..size).map(|i| Cell::new(size - 1 - i, i)).collect());
    lines
}

/// Returns the owner of the line if all of its squares match.
fn line_owner(board: &Board, line: &[Cell]) -> Option<Player> {
    let first = board.get(*line.first()?)?.player()?;
    line.iter()
        .all(|&cell| board.get(cell) == Some(Square::Occupied(first)))
        .then_some(first)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first complete line found,
/// `None` otherwise.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    lines(board.size())
        .iter()
        .find_map(|line| line_owner(board, line))
}
