//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are kept apart from board
//! storage so the engine can derive its status on demand.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the status of a board: a completed line wins, otherwise a
/// full board is drawn.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
