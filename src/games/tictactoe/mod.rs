//! Tic-tac-toe on a fixed 3x3 grid of screen cells.

mod board;
mod game;
pub mod geometry;
mod position;
pub mod rules;
mod types;

pub use board::{Board, Placement};
pub use game::{Game, GameStatus, MoveResult};
pub use position::Position;
pub use types::{Cell, Player, ScreenPos, Square};

