//! Crossterm-backed screen: raw mode, alternate screen, key events.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, instrument, warn};

use super::input::Key;
use super::screen::Screen;
use super::ui;
use crate::error::TerminalError;
use crate::games::tictactoe::{Board, ScreenPos};

/// The real terminal. Restores it on drop.
pub struct TerminalScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalScreen {
    /// Switches the terminal to raw mode on the alternate screen.
    #[instrument]
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = restore();
            return Err(e.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                let _ = restore();
                return Err(e.into());
            }
        };
        info!("Terminal acquired");
        Ok(Self { terminal })
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        info!("Restoring terminal");
        if let Err(e) = restore() {
            warn!(error = %e, "Failed to restore terminal mode");
        }
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
    }
}

impl Screen for TerminalScreen {
    fn next_key(&mut self) -> Result<Key, TerminalError> {
        loop {
            if let Event::Key(event) = event::read()? {
                if event.kind == KeyEventKind::Press {
                    let key = Key::from(event);
                    debug!(code = ?event.code, ?key, "Key pressed");
                    return Ok(key);
                }
            }
        }
    }

    fn move_cursor(&mut self, pos: ScreenPos) -> Result<(), TerminalError> {
        let at = ui::to_buffer(pos)
            .ok_or_else(|| TerminalError::new(format!("Cursor position {} is off screen", pos)))?;
        self.terminal.set_cursor_position(at)?;
        Ok(())
    }

    fn render(
        &mut self,
        board: &Board,
        cursor: ScreenPos,
        status: &str,
    ) -> Result<(), TerminalError> {
        self.terminal.draw(|frame| {
            ui::draw(frame.buffer_mut(), board, status);
            if let Some(at) = ui::to_buffer(cursor) {
                frame.set_cursor_position(at);
            }
        })?;
        Ok(())
    }
}
