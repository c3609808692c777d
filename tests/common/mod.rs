//! Scripted screen shared by the integration tests.

use std::collections::VecDeque;

use strictly_cursor_toe::{Board, Key, Screen, ScreenPos, TerminalError};

/// Replays a fixed list of keys and records everything drawn.
#[derive(Debug, Default)]
pub struct ScriptedScreen {
    pub keys: VecDeque<Key>,
    pub renders: Vec<(Board, ScreenPos, String)>,
    pub cursor_moves: Vec<ScreenPos>,
}

impl ScriptedScreen {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Screen for ScriptedScreen {
    fn next_key(&mut self) -> Result<Key, TerminalError> {
        self.keys
            .pop_front()
            .ok_or_else(|| TerminalError::new("Key script exhausted"))
    }

    fn move_cursor(&mut self, pos: ScreenPos) -> Result<(), TerminalError> {
        self.cursor_moves.push(pos);
        Ok(())
    }

    fn render(
        &mut self,
        board: &Board,
        cursor: ScreenPos,
        status: &str,
    ) -> Result<(), TerminalError> {
        self.renders.push((board.clone(), cursor, status.to_string()));
        Ok(())
    }
}
