//! Key decoding for keyboard navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Cursor step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One column left.
    Left,
    /// One column right.
    Right,
    /// One row up.
    Up,
    /// One row down.
    Down,
}

/// A key press as the game understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Arrow key or its vi-style letter.
    Move(Direction),
    /// Space: play the cell under the cursor.
    Confirm,
    /// `q` or Ctrl-C.
    Quit,
    /// Anything else.
    Other,
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') => Key::Quit,
                _ => Key::Other,
            };
        }
        Key::from(event.code)
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Left | KeyCode::Char('h') => Key::Move(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => Key::Move(Direction::Right),
            KeyCode::Up | KeyCode::Char('k') => Key::Move(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => Key::Move(Direction::Down),
            KeyCode::Char(' ') => Key::Confirm,
            KeyCode::Char('q') => Key::Quit,
            _ => Key::Other,
        }
    }
}
