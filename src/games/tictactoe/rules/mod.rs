//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board): they inspect the current
//! cell contents only and keep no history.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_win;
