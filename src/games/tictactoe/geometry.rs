//! Screen geometry of the grid.
//!
//! Every screen coordinate the game uses is derived from the constants
//! below. Cell centers are where marks are drawn and where the cursor rests.

use super::{Position, ScreenPos};
use tracing::instrument;

/// Cells per side.
pub const BOARD_DIM: usize = 3;
/// Horizontal distance between adjacent cell centers.
pub const CELL_WIDTH: i32 = 6;
/// Vertical distance between adjacent cell centers.
pub const CELL_HEIGHT: i32 = 2;
/// Screen column of the grid's left edge.
pub const START_X: i32 = 4;
/// Screen row of the grid's top edge.
pub const START_Y: i32 = 2;

const DIM: i32 = BOARD_DIM as i32;

/// Screen column of the grid's right edge.
pub const END_X: i32 = START_X + DIM * CELL_WIDTH;
/// Screen row of the grid's bottom edge.
pub const END_Y: i32 = START_Y + DIM * CELL_HEIGHT;

/// Center of the cell at grid column `col` and row `row`.
pub fn cell_center(col: usize, row: usize) -> ScreenPos {
    ScreenPos::new(
        START_X + col as i32 * CELL_WIDTH + CELL_WIDTH / 2,
        START_Y + row as i32 * CELL_HEIGHT + CELL_HEIGHT / 2,
    )
}

/// Lowest cursor coordinate on each axis (inclusive): the first cell center.
pub fn cursor_min() -> ScreenPos {
    ScreenPos::new(START_X + CELL_WIDTH / 2, START_Y + CELL_HEIGHT / 2)
}

/// Cursor limit on each axis (exclusive): one spacing past the last center.
pub fn cursor_max() -> ScreenPos {
    ScreenPos::new(
        START_X + DIM * CELL_WIDTH + CELL_WIDTH / 2,
        START_Y + DIM * CELL_HEIGHT + CELL_HEIGHT / 2,
    )
}

/// Maps a cell center back to its cell.
///
/// Returns `None` for anything that is not exactly a cell center.
#[instrument]
pub fn cell_at(pos: ScreenPos) -> Option<Position> {
    let dx = pos.x - START_X - CELL_WIDTH / 2;
    let dy = pos.y - START_Y - CELL_HEIGHT / 2;
    if dx < 0 || dy < 0 || dx % CELL_WIDTH != 0 || dy % CELL_HEIGHT != 0 {
        return None;
    }
    let col = (dx / CELL_WIDTH) as usize;
    let row = (dy / CELL_HEIGHT) as usize;
    Position::from_grid(col, row)
}

impl Position {
    /// Screen coordinate of this cell's center.
    pub fn center(self) -> ScreenPos {
        cell_center(self.col(), self.row())
    }
}
