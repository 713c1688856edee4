//! Tic-tac-toe on an `N`x`N` board.

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use game::{DEFAULT_BOARD_SIZE, TicTacToe};
pub use position::Cell;
pub use types::{Board, GameStatus, Player, Square};
