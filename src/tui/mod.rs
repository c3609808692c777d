//! Terminal front end: key input, cursor control, rendering and the game loop.

mod cursor;
mod input;
mod screen;
mod terminal;
pub mod ui;

pub use cursor::{CursorController, Selection};
pub use input::{Direction, Key};
pub use screen::Screen;
pub use terminal::TerminalScreen;

use derive_more::Display;
use tracing::{debug, info, instrument, warn};

use crate::error::TerminalError;
use crate::games::tictactoe::{Game, GameStatus, MoveResult, Player, geometry};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("Player {_0} wins!")]
    Won(Player),
    /// The board filled up with no winner.
    #[display("Draw!")]
    Draw,
    /// The quit key was pressed.
    #[display("Game abandoned.")]
    Quit,
}

/// Status line for the current game state.
pub fn status_line(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => format!("Player {}'s turn", game.current_player()),
        GameStatus::Won(player) => format!("Player {} wins!", player),
        GameStatus::Draw => "Draw!".to_string(),
    }
}

/// Plays one game on `screen` until someone wins, the board fills, or the
/// player quits.
#[instrument(skip_all)]
pub fn run<S: Screen>(screen: &mut S) -> Result<Outcome, TerminalError> {
    let mut game = Game::new();
    let mut cursor = CursorController::new(game.board());
    info!("Game started");
    screen.render(game.board(), cursor.position(), &status_line(&game))?;

    loop {
        let pos = match cursor.read_move(screen)? {
            Selection::Quit => {
                info!("Player quit");
                return Ok(Outcome::Quit);
            }
            Selection::Confirm(pos) => pos,
        };
        let Some(cell) = geometry::cell_at(pos) else {
            warn!(%pos, "Cursor is not on a cell center");
            continue;
        };

        let outcome = match game.play(cell) {
            MoveResult::Rejected => {
                debug!(%cell, "Move rejected, same player again");
                continue;
            }
            MoveResult::NextTurn(_) => None,
            MoveResult::Won(player) => Some(Outcome::Won(player)),
            MoveResult::Draw => Some(Outcome::Draw),
        };

        cursor.recenter();
        screen.render(game.board(), cursor.position(), &status_line(&game))?;
        if let Some(outcome) = outcome {
            info!(%outcome, "Game over");
            return Ok(outcome);
        }
    }
}
