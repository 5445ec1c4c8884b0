//! Board coordinate representation.

use std::fmt;
use thiserror::Error;

/// Errors raised when a coordinate falls outside the 8x8 grid.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CoordError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },
}

/// A square on the board, addressed by row and column (both 0-7).
///
/// Row 0 is Player 1's back row. Column 0 is the h-file, so the kings
/// start on column 3. Internally the square is stored as `row * 8 + col`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column, or `None` if either is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from row and column, reporting off-board coordinates.
    pub const fn try_new(row: u8, col: u8) -> Result<Self, CoordError> {
        match Self::new(row, col) {
            Some(sq) => Ok(sq),
            None => Err(CoordError::OutOfBounds { row, col }),
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from an index already known to be in 0-63.
    #[inline]
    pub(crate) const fn from_index_masked(index: u8) -> Self {
        Square(index & 0x3F)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square displaced by the given deltas, or `None` if it
    /// would leave the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            return None;
        }
        Some(Square(row as u8 * 8 + col as u8))
    }

    /// Iterates over all 64 squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Returns the algebraic name of this square (e.g. `e2`).
    pub fn to_algebraic(self) -> String {
        let file = (b'h' - self.col()) as char;
        let rank = (b'1' + self.row()) as char;
        format!("{}{}", file, rank)
    }

    /// Row 0, column 0.
    pub const ORIGIN: Square = Square(0);
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.row(), sq.col())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
