//! Cursor movement constrained to the grid's cell centers.

use super::input::{Direction, Key};
use super::screen::Screen;
use crate::error::TerminalError;
use crate::games::tictactoe::geometry::{CELL_HEIGHT, CELL_WIDTH};
use crate::games::tictactoe::{Board, Position, ScreenPos};
use tracing::{debug, instrument};

/// What the player did with the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Space was pressed with the cursor here.
    Confirm(ScreenPos),
    /// The player asked to leave.
    Quit,
}

/// Tracks the cursor and keeps it on a cell center.
#[derive(Debug, Clone)]
pub struct CursorController {
    pos: ScreenPos,
    min: ScreenPos,
    max: ScreenPos,
}

impl CursorController {
    /// Creates a cursor resting on the middle cell of `board`.
    pub fn new(board: &Board) -> Self {
        Self {
            pos: Position::Center.center(),
            min: board.min(),
            max: board.max(),
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> ScreenPos {
        self.pos
    }

    /// Puts the cursor back on the middle cell.
    pub fn recenter(&mut self) {
        self.pos = Position::Center.center();
    }

    /// Moves one cell in `dir` if that stays on the grid.
    ///
    /// Returns whether the cursor moved.
    pub fn step(&mut self, dir: Direction) -> bool {
        let mut next = self.pos;
        let in_bounds = match dir {
            Direction::Left => {
                next.x -= CELL_WIDTH;
                next.x >= self.min.x
            }
            Direction::Right => {
                next.x += CELL_WIDTH;
                next.x < self.max.x
            }
            Direction::Up => {
                next.y -= CELL_HEIGHT;
                next.y >= self.min.y
            }
            Direction::Down => {
                next.y += CELL_HEIGHT;
                next.y < self.max.y
            }
        };
        if in_bounds {
            self.pos = next;
        } else {
            debug!(?dir, pos = %self.pos, "Cursor at grid edge");
        }
        in_bounds
    }

    /// Reads keys until the player confirms a cell or quits.
    ///
    /// Every committed step is echoed to the screen right away.
    #[instrument(skip_all, fields(start = %self.pos))]
    pub fn read_move<S: Screen>(&mut self, screen: &mut S) -> Result<Selection, TerminalError> {
        loop {
            match screen.next_key()? {
                Key::Quit => return Ok(Selection::Quit),
                Key::Confirm => return Ok(Selection::Confirm(self.pos)),
                Key::Move(dir) => {
                    if self.step(dir) {
                        screen.move_cursor(self.pos)?;
                    }
                }
                Key::Other => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_center() {
        let cursor = CursorController::new(&Board::new());
        assert_eq!(cursor.position(), Position::Center.center());
    }

    #[test]
    fn test_left_stops_at_left_column() {
        let mut cursor = CursorController::new(&Board::new());
        assert!(cursor.step(Direction::Left));
        for _ in 0..5 {
            assert!(!cursor.step(Direction::Left));
        }
        assert_eq!(cursor.position(), Position::MiddleLeft.center());
    }

    #[test]
    fn test_each_edge_is_reachable_and_final() {
        let mut cursor = CursorController::new(&Board::new());
        assert!(cursor.step(Direction::Right));
        assert!(!cursor.step(Direction::Right));
        assert!(cursor.step(Direction::Down));
        assert!(!cursor.step(Direction::Down));
        assert_eq!(cursor.position(), Position::BottomRight.center());

        cursor.recenter();
        assert!(cursor.step(Direction::Up));
        assert!(!cursor.step(Direction::Up));
        assert_eq!(cursor.position(), Position::TopCenter.center());
    }

    #[test]
    fn test_blocked_axis_leaves_other_axis_alone() {
        let mut cursor = CursorController::new(&Board::new());
        cursor.step(Direction::Up);
        let before = cursor.position();
        cursor.step(Direction::Up);
        assert_eq!(cursor.position(), before);
    }
}
