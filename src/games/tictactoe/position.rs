//! Board coordinates for tic-tac-toe moves.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board addressed by column and row, both zero-based.
///
/// Column comes first, matching the `(col, row)` order used by every
/// engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({col}, {row})")]
pub struct Cell {
    /// Column, counted from the left edge.
    pub col: usize,
    /// Row, counted from the top edge.
    pub row: usize,
}

impl Cell {
    /// Creates a cell from column and row.
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Converts the cell to a row-major board index.
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Creates a cell from a row-major board index.
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        if size == 0 || index >= size * size {
            return None;
        }
        Some(Self::new(index % size, index / size))
    }

    /// Parses `"<col> <row>"` (whitespace or comma separated).
    #[instrument]
    pub fn parse(s: &str) -> Option<Cell> {
        let mut parts = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty());
        let col = parts.next()?.parse().ok()?;
        let row = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Cell::new(col, row))
    }
}

impl From<(usize, usize)> for Cell {
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}
