//! Strictly Cursor Toe - two-player tic-tac-toe in the terminal
//!
//! # Architecture
//!
//! - **Games**: the board, its screen geometry, and the win/draw rules
//! - **TUI**: key decoding, a grid-bound cursor, rendering, and the game loop
//!
//! # Example
//!
//! ```no_run
//! use strictly_cursor_toe::{TerminalScreen, run};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut screen = TerminalScreen::new()?;
//! let outcome = run(&mut screen)?;
//! drop(screen);
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod games;
pub mod tui;

pub use error::TerminalError;

pub use games::tictactoe::{
    Board, Cell, Game, GameStatus, MoveResult, Placement, Player, Position, ScreenPos, Square,
};

pub use tui::{CursorController, Direction, Key, Outcome, Screen, Selection, TerminalScreen, run};
