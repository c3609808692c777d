//! Win detection logic for tic-tac-toe.

use super::super::geometry::BOARD_DIM;
use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Checks if `player` owns a full line after playing `last_move`.
///
/// Counts the player's marks along the row and column through `last_move`
/// and along both diagonals. The diagonals are always scanned, whether or
/// not `last_move` lies on them.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player, last_move: Position) -> bool {
    let idx = last_move.to_index();
    let (major, minor) = (idx / BOARD_DIM, idx % BOARD_DIM);
    let owned = |i: usize| {
        Position::from_index(i).is_some_and(|p| board.get(p) == Square::Occupied(player))
    };

    let (mut along, mut across, mut diag, mut rdiag) = (0, 0, 0, 0);
    for i in 0..BOARD_DIM {
        if owned(major * BOARD_DIM + i) {
            along += 1;
        }
        if owned(i * BOARD_DIM + minor) {
            across += 1;
        }
        if owned(i * BOARD_DIM + i) {
            diag += 1;
        }
        if owned(i * BOARD_DIM + (BOARD_DIM - i - 1)) {
            rdiag += 1;
        }
    }

    [along, across, diag, rdiag].contains(&BOARD_DIM)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in indices {
            let pos = Position::from_index(i).unwrap();
            let _ = board.apply_move(pos, player);
        }
        board
    }

    fn at(i: usize) -> Position {
        Position::from_index(i).unwrap()
    }

    #[test]
    fn test_no_win_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Player::X, Position::Center));
    }

    #[test]
    fn test_win_first_line() {
        let board = board_with(Player::X, &[0, 1, 2]);
        assert!(check_win(&board, Player::X, at(2)));
    }

    #[test]
    fn test_win_cross_line() {
        let board = board_with(Player::X, &[0, 3, 6]);
        assert!(check_win(&board, Player::X, at(6)));
    }

    #[test]
    fn test_win_main_diagonal() {
        let board = board_with(Player::X, &[0, 4, 8]);
        assert!(check_win(&board, Player::X, at(8)));
    }

    #[test]
    fn test_win_anti_diagonal() {
        let board = board_with(Player::X, &[2, 4, 6]);
        assert!(check_win(&board, Player::X, at(4)));
    }

    #[test]
    fn test_two_in_line_with_gap_is_not_win() {
        let board = board_with(Player::X, &[0, 1]);
        assert!(!check_win(&board, Player::X, at(1)));
    }

    #[test]
    fn test_two_in_line_blocked_is_not_win() {
        let mut board = board_with(Player::X, &[0, 4]);
        let _ = board.apply_move(at(8), Player::O);
        assert!(!check_win(&board, Player::X, at(4)));
    }

    #[test]
    fn test_other_players_line_does_not_count() {
        let board = board_with(Player::O, &[0, 1, 2]);
        assert!(!check_win(&board, Player::X, at(2)));
        assert!(check_win(&board, Player::O, at(2)));
    }

    #[test]
    fn test_diagonal_found_from_off_diagonal_move() {
        let mut board = board_with(Player::X, &[0, 4, 8]);
        let _ = board.apply_move(at(1), Player::X);
        assert!(check_win(&board, Player::X, at(1)));
    }
}
