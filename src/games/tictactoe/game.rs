//! Turn-taking game engine for tic-tac-toe.

use super::rules::is_full;
use super::{Board, Placement, Player, Position};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// What a single move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Cell was taken (or the game is over); the same player moves again.
    Rejected,
    /// Mark placed; the turn passed to the given player.
    NextTurn(Player),
    /// Mark placed and it completed a line.
    Won(Player),
    /// Mark placed and it filled the board without a winner.
    Draw,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Player,
    last_move: Option<Position>,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            last_move: None,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the most recently accepted move.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Plays the current player's mark at `pos`.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, pos: Position) -> MoveResult {
        if self.status != GameStatus::InProgress {
            debug!(status = ?self.status, "Game is already over");
            return MoveResult::Rejected;
        }

        let player = self.current_player;
        if let Placement::Occupied(_) = self.board.apply_move(pos, player) {
            return MoveResult::Rejected;
        }
        self.last_move = Some(pos);

        if self.board.check_win(player, pos) {
            info!(%player, %pos, "Line completed");
            self.status = GameStatus::Won(player);
            return MoveResult::Won(player);
        }
        if is_full(&self.board) {
            info!("Board full without a winner");
            self.status = GameStatus::Draw;
            return MoveResult::Draw;
        }

        self.current_player = player.opponent();
        MoveResult::NextTurn(self.current_player)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
