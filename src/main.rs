//! Strictly Cursor Toe - terminal binary
//!
//! Starts a game right away; exits on a win, a draw, or `q`.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::Path;
use strictly_cursor_toe::{TerminalScreen, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    info!("Starting Strictly Cursor Toe");

    let mut screen = TerminalScreen::new().context("Failed to initialize terminal")?;
    let outcome = run(&mut screen);
    drop(screen);

    let outcome = outcome.context("Game loop failed")?;
    println!("{outcome}");
    Ok(())
}

/// Logs go to a file so they never draw over the board.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
