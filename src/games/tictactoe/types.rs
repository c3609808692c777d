//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
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

    /// Glyph drawn for this player's mark.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// Contents of a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A terminal coordinate, in columns (`x`) and rows (`y`).
///
/// Signed so that a tentative cursor step past the top-left edge is still
/// representable before it is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, new)]
#[display("({x}, {y})")]
pub struct ScreenPos {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

/// One of the nine grid cells: what it holds and where it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Cell {
    /// Mark in this cell.
    contents: Square,
    /// Screen coordinate of the cell center.
    center: ScreenPos,
}

impl Cell {
    pub(super) fn empty(center: ScreenPos) -> Self {
        Self {
            contents: Square::Empty,
            center,
        }
    }

    pub(super) fn set_contents(&mut self, contents: Square) {
        self.contents = contents;
    }

    /// Checks if nothing has been played here yet.
    pub fn is_empty(&self) -> bool {
        self.contents == Square::Empty
    }
}
