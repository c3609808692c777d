//! Cell positions on the tic-tac-toe board.

use super::geometry::BOARD_DIM;
use derive_more::Display;
use tracing::instrument;

/// A cell on the board (0-8).
///
/// Indices run down each column first: `index = col * 3 + row`, so
/// 0, 1, 2 is the left column and 0, 3, 6 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    #[display("Top-left")]
    TopLeft,
    /// Middle-left (index 1)
    #[display("Middle-left")]
    MiddleLeft,
    /// Bottom-left (index 2)
    #[display("Bottom-left")]
    BottomLeft,
    /// Top-center (index 3)
    #[display("Top-center")]
    TopCenter,
    /// Center (index 4)
    #[display("Center")]
    Center,
    /// Bottom-center (index 5)
    #[display("Bottom-center")]
    BottomCenter,
    /// Top-right (index 6)
    #[display("Top-right")]
    TopRight,
    /// Middle-right (index 7)
    #[display("Middle-right")]
    MiddleRight,
    /// Bottom-right (index 8)
    #[display("Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions, in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from grid column and row (each 0-2).
    pub fn from_grid(col: usize, row: usize) -> Option<Self> {
        if col >= BOARD_DIM || row >= BOARD_DIM {
            return None;
        }
        Self::from_index(col * BOARD_DIM + row)
    }

    /// Grid column (0 = left).
    pub fn col(self) -> usize {
        self.to_index() / BOARD_DIM
    }

    /// Grid row (0 = top).
    pub fn row(self) -> usize {
        self.to_index() % BOARD_DIM
    }
}
