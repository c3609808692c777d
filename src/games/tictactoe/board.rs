//! The 3x3 board: cell contents, screen positions and cursor bounds.

use super::geometry::{cell_center, cursor_max, cursor_min};
use super::rules::win;
use super::{Cell, Player, Position, ScreenPos, Square};
use tracing::{debug, instrument};

/// Result of trying to place a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Placement {
    /// The mark was written to an empty cell.
    Placed,
    /// The cell already held a mark (owned by the carried player); nothing changed.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in index order (`col * 3 + row`).
    cells: [Cell; 9],
    min: ScreenPos,
    max: ScreenPos,
}

impl Board {
    /// Creates an empty board with every cell centered on its grid slot.
    #[instrument]
    pub fn new() -> Self {
        let cells = Position::ALL.map(|pos| Cell::empty(cell_center(pos.col(), pos.row())));
        Self {
            cells,
            min: cursor_min(),
            max: cursor_max(),
        }
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.to_index()]
    }

    /// Gets the contents of the cell at the given position.
    pub fn get(&self, pos: Position) -> Square {
        *self.cell(pos).contents()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Returns all cells in index order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Lowest cursor coordinate on each axis (inclusive).
    pub fn min(&self) -> ScreenPos {
        self.min
    }

    /// Cursor limit on each axis (exclusive).
    pub fn max(&self) -> ScreenPos {
        self.max
    }

    /// Places `player`'s mark at `pos` if the cell is empty.
    ///
    /// An occupied cell is left untouched; the caller asks for another move.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position, player: Player) -> Placement {
        let cell = &mut self.cells[pos.to_index()];
        let current = *cell.contents();
        match current {
            Square::Empty => {
                cell.set_contents(Square::Occupied(player));
                Placement::Placed
            }
            Square::Occupied(owner) => {
                debug!(%pos, %owner, "Cell already taken");
                Placement::Occupied(owner)
            }
        }
    }

    /// Checks whether `player` has completed a line through the board
    /// after playing `last_move`.
    pub fn check_win(&self, player: Player, last_move: Position) -> bool {
        win::check_win(self, player, last_move)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
    }

    #[test]
    fn test_apply_move_touches_only_target() {
        for target in Position::ALL {
            let mut board = Board::new();
            let before = board.clone();
            assert_eq!(board.apply_move(target, Player::O), Placement::Placed);
            for pos in Position::ALL {
                if pos == target {
                    assert_eq!(board.get(pos), Square::Occupied(Player::O));
                } else {
                    assert_eq!(board.cell(pos), before.cell(pos));
                }
            }
        }
    }

    #[test]
    fn test_apply_move_on_occupied_is_noop() {
        let mut board = Board::new();
        let _ = board.apply_move(Position::Center, Player::X);
        let before = board.clone();
        assert_eq!(
            board.apply_move(Position::Center, Player::O),
            Placement::Occupied(Player::X)
        );
        assert_eq!(board, before);
    }
}
