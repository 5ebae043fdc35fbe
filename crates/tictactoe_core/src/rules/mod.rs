//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are separated from board storage so the engine
//! and the invariant checks can share them.

pub mod draw;
pub mod line;
pub mod win;

pub use draw::{is_draw, is_full};
pub use line::Line;
pub use win::{check_winner, winning_line};

use super::{Board, GameState};
use tracing::instrument;

/// Computes the game state a board implies.
///
/// A completed line wins; otherwise a full board is a draw; otherwise play
/// continues.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameState {
    if let Some(winner) = check_winner(board) {
        GameState::Won(winner)
    } else if is_full(board) {
        GameState::Draw
    } else {
        GameState::InProgress
    }
}
