//! Command-line interface for strictly_cursor_toe.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Cursor Toe - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_cursor_toe")]
#[command(about = "Two-player tic-tac-toe with a keyboard cursor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
