//! The terminal-control surface the game loop draws on and reads from.

use super::input::Key;
use crate::error::TerminalError;
use crate::games::tictactoe::{Board, ScreenPos};

/// A keyboard-driven character screen.
///
/// Implementations own the terminal for as long as they live and give it
/// back when dropped.
pub trait Screen {
    /// Blocks until the next key press.
    fn next_key(&mut self) -> Result<Key, TerminalError>;

    /// Moves the visible cursor to an absolute screen position.
    fn move_cursor(&mut self, pos: ScreenPos) -> Result<(), TerminalError>;

    /// Redraws grid, marks and status line, leaving the cursor at `cursor`.
    fn render(&mut self, board: &Board, cursor: ScreenPos, status: &str)
    -> Result<(), TerminalError>;
}
