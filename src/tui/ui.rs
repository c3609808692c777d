//! Stateless rendering of the board into a character buffer.

use ratatui::{
    buffer::Buffer,
    layout,
    style::{Color, Modifier, Style},
};

use crate::games::tictactoe::geometry::{CELL_HEIGHT, CELL_WIDTH, END_X, END_Y, START_X, START_Y};
use crate::games::tictactoe::{Board, Player, ScreenPos, Square};

/// Key reminder drawn under the status line.
pub const HELP: &str = "arrows/hjkl: move   space: place   q: quit";

/// Row of the status line.
pub const STATUS_ROW: i32 = END_Y + 1;

/// Converts a screen coordinate to a buffer position, if it is on screen.
pub fn to_buffer(pos: ScreenPos) -> Option<layout::Position> {
    let x = u16::try_from(pos.x).ok()?;
    let y = u16::try_from(pos.y).ok()?;
    Some(layout::Position::new(x, y))
}

/// Draws grid lines, played marks, status and help text.
pub fn draw(buf: &mut Buffer, board: &Board, status: &str) {
    draw_grid(buf);

    for cell in board.cells() {
        if let Square::Occupied(player) = *cell.contents() {
            put(buf, *cell.center(), player.mark(), mark_style(player));
        }
    }

    put_str(
        buf,
        ScreenPos::new(START_X, STATUS_ROW),
        status,
        Style::default().fg(Color::Yellow),
    );
    put_str(
        buf,
        ScreenPos::new(START_X, STATUS_ROW + 1),
        HELP,
        Style::default().fg(Color::DarkGray),
    );
}

fn draw_grid(buf: &mut Buffer) {
    let style = Style::default().fg(Color::DarkGray);

    for y in (START_Y..=END_Y).step_by(CELL_HEIGHT as usize) {
        for x in START_X..=END_X {
            put(buf, ScreenPos::new(x, y), '─', style);
        }
    }
    for x in (START_X..=END_X).step_by(CELL_WIDTH as usize) {
        for y in START_Y..=END_Y {
            put(buf, ScreenPos::new(x, y), '│', style);
        }
    }

    put(buf, ScreenPos::new(START_X, START_Y), '┌', style);
    put(buf, ScreenPos::new(START_X, END_Y), '└', style);
    put(buf, ScreenPos::new(END_X, START_Y), '┐', style);
    put(buf, ScreenPos::new(END_X, END_Y), '┘', style);

    for y in (START_Y + CELL_HEIGHT..END_Y).step_by(CELL_HEIGHT as usize) {
        put(buf, ScreenPos::new(START_X, y), '├', style);
        put(buf, ScreenPos::new(END_X, y), '┤', style);
        for x in (START_X + CELL_WIDTH..END_X).step_by(CELL_WIDTH as usize) {
            put(buf, ScreenPos::new(x, y), '┼', style);
        }
    }
    for x in (START_X + CELL_WIDTH..END_X).step_by(CELL_WIDTH as usize) {
        put(buf, ScreenPos::new(x, START_Y), '┬', style);
        put(buf, ScreenPos::new(x, END_Y), '┴', style);
    }
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn put_str(buf: &mut Buffer, at: ScreenPos, text: &str, style: Style) {
    for (i, ch) in text.chars().enumerate() {
        put(buf, ScreenPos::new(at.x + i as i32, at.y), ch, style);
    }
}

// Writes outside the buffer are dropped; a small terminal just clips.
fn put(buf: &mut Buffer, at: ScreenPos, ch: char, style: Style) {
    if let Some(cell) = to_buffer(at).and_then(|p| buf.cell_mut(p)) {
        cell.set_char(ch).set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;
    use ratatui::layout::Rect;

    fn symbol(buf: &Buffer, x: i32, y: i32) -> String {
        to_buffer(ScreenPos::new(x, y))
            .and_then(|p| buf.cell(p))
            .map(|c| c.symbol().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_grid_corners_and_crossings() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 14));
        draw(&mut buf, &Board::new(), "");
        assert_eq!(symbol(&buf, START_X, START_Y), "┌");
        assert_eq!(symbol(&buf, END_X, END_Y), "┘");
        assert_eq!(symbol(&buf, START_X + CELL_WIDTH, START_Y + CELL_HEIGHT), "┼");
        assert_eq!(symbol(&buf, START_X + CELL_WIDTH, START_Y), "┬");
        assert_eq!(symbol(&buf, START_X, START_Y + CELL_HEIGHT), "├");
        assert_eq!(symbol(&buf, START_X + 1, START_Y), "─");
        assert_eq!(symbol(&buf, START_X, START_Y + 1), "│");
    }

    #[test]
    fn test_marks_drawn_at_cell_centers() {
        let mut board = Board::new();
        let _ = board.apply_move(Position::TopLeft, Player::X);
        let _ = board.apply_move(Position::BottomRight, Player::O);
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 14));
        draw(&mut buf, &board, "Player X's turn");

        let x = Position::TopLeft.center();
        let o = Position::BottomRight.center();
        assert_eq!(symbol(&buf, x.x, x.y), "X");
        assert_eq!(symbol(&buf, o.x, o.y), "O");
        let c = Position::Center.center();
        assert_eq!(symbol(&buf, c.x, c.y), " ");
        assert_eq!(symbol(&buf, START_X, STATUS_ROW), "P");
    }

    #[test]
    fn test_tiny_buffer_clips_without_panicking() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 3));
        draw(&mut buf, &Board::new(), "a long status that does not fit");
        assert_eq!(symbol(&buf, START_X, START_Y), "┌");
    }

    #[test]
    fn test_negative_coordinates_are_off_screen() {
        assert_eq!(to_buffer(ScreenPos::new(-1, 0)), None);
        assert_eq!(to_buffer(ScreenPos::new(3, 4)), Some(layout::Position::new(3, 4)));
    }
}
