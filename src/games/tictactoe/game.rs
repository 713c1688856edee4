//! Tic-tac-toe game engine.
//!
//! The engine owns the board, whose turn it is, and the move history.
//! Status is never stored: it is derived from the board by the rules
//! module each time it is asked for, so it cannot drift out of sync.

use super::action::MoveError;
use super::position::Cell;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use crate::ArgumentError;
use tracing::{debug, info, instrument};

/// Default side length of a tic-tac-toe board.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Tic-tac-toe game engine for an `N`x`N` board.
///
/// [`Player::X`] always moves first. A line wins only when it spans the
/// whole board, so on boards larger than 3x3 the game is "N in a row".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    board: Board,
    turn: Player,
    history: Vec<Cell>,
}

impl TicTacToe {
    /// Creates a new game on a `size`x`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `size` is zero, or if a `size`x`size`
    /// board cannot be represented in memory.
    #[track_caller]
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ArgumentError> {
        if size == 0 {
            return Err(ArgumentError::new(format!(
                "Board size must be at least 1, got {}",
                size
            )));
        }
        let board = Board::try_new(size)
            .map_err(|e| ArgumentError::new(format!("{} for size {}", e, size)))?;
        info!(size, "Creating tic-tac-toe game");
        Ok(Self {
            board,
            turn: Player::X,
            history: Vec::new(),
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the cells played this game, oldest first.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    /// Derives the game status from the board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Returns the winning player, or `None` while in progress or drawn.
    pub fn winner(&self) -> Option<Player> {
        match self.status() {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Tests whether the current player may move to `(col, row)`.
    #[instrument(skip(self))]
    pub fn can_place(&self, col: usize, row: usize) -> bool {
        self.check_place(Cell::new(col, row)).is_ok()
    }

    /// Reports why a placement at `cell` would be refused.
    fn check_place(&self, cell: Cell) -> Result<(), MoveError> {
        if !self.board.contains(cell) {
            return Err(MoveError::OutOfBounds(cell, self.size()));
        }
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(cell) {
            return Err(MoveError::SquareOccupied(cell));
        }
        Ok(())
    }

    /// Places the current player's mark at `(col, row)`.
    ///
    /// On success the turn passes to the opponent and the new status is
    /// returned. A refused move leaves the game untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the cell is off the board or occupied, or
    /// if the game is already over.
    #[instrument(skip(self), fields(player = ?self.turn))]
    pub fn place(&mut self, col: usize, row: usize) -> Result<GameStatus, MoveError> {
        let cell = Cell::new(col, row);
        if let Err(e) = self.check_place(cell) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        let player = self.turn;
        self.board
            .set(cell, Square::Occupied(player))
            .map_err(|_| MoveError::OutOfBounds(cell, self.size()))?;
        self.history.push(cell);
        self.turn = player.opponent();

        let status = self.status();
        match status {
            GameStatus::Won(winner) => info!(%winner, moves = self.history.len(), "Game won"),
            GameStatus::Draw => info!(moves = self.history.len(), "Game drawn"),
            GameStatus::InProgress => debug!(%cell, next = ?self.turn, "Move applied"),
        }
        Ok(status)
    }

    /// Returns every empty cell in row-major order, or nothing once the
    /// game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Cell> {
        if self.is_over() {
            return Vec::new();
        }
        let size = self.size();
        (0..size * size)
            .filter_map(|idx| Cell::from_index(idx, size))
            .filter(|&cell| self.board.is_empty(cell))
            .collect()
    }

    /// Clears the board and hands the first move back to [`Player::X`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(size = self.size(), "Resetting tic-tac-toe game");
        self.board.clear();
        self.turn = Player::X;
        self.history.clear();
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self {
            board: Board::new(DEFAULT_BOARD_SIZE),
            turn: Player::X,
            history: Vec::new(),
        }
    }
}
