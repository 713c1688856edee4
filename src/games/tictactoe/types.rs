//! Core domain types for tic-tac-toe.

use super::position::Cell;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Square tic-tac-toe board of any side length.
///
/// Squares are stored in row-major order, so the square at `(col, row)`
/// lives at index `row * size + col`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board with `size` rows and columns.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` squares cannot be allocated. Use
    /// [`Board::try_new`] for sizes that come from user input.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Creates a new empty board, refusing sizes whose square count
    /// overflows or cannot be allocated.
    pub fn try_new(size: usize) -> Result<Self, &'static str> {
        let count = size
            .checked_mul(size)
            .ok_or("Board square count overflows")?;
        let mut squares = Vec::new();
        squares
            .try_reserve_exact(count)
            .map_err(|_| "Board is too large to allocate")?;
        squares.resize(count, Square::Empty);
        Ok(Self { size, squares })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the cell lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.size && cell.row < self.size
    }

    /// Gets the square at the given cell, or `None` when off the board.
    pub fn get(&self, cell: Cell) -> Option<Square> {
        if !self.contains(cell) {
            return None;
        }
        self.squares.get(cell.to_index(self.size)).copied()
    }

    /// Sets the square at the given cell.
    pub fn set(&mut self, cell: Cell, square: Square) -> Result<(), &'static str> {
        if !self.contains(cell) {
            return Err("Cell out of bounds");
        }
        let idx = cell.to_index(self.size);
        self.squares[idx] = square;
        Ok(())
    }

    /// Checks if a square is empty. Cells off the board are never empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Square> + '_ {
        (0..self.size).filter_map(move |col| self.get(Cell::new(col, row)))
    }

    /// Number of squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Empties every square.
    pub(super) fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Formats the board as a human-readable string.
    ///
    /// Rows are separated by newlines, empty squares render as `.`.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            let line: Vec<&str> = self
                .row(row)
                .map(|square| match square {
                    Square::Empty => ".",
                    Square::Occupied(Player::X) => "X",
                    Square::Occupied(Player::O) => "O",
                })
                .collect();
            result.push_str(&line.join(" "));
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}
