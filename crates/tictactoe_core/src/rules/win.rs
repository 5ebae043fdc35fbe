//! Win detection logic for tic-tac-toe.

use super::line::Line;
use crate::{Board, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Finds the first completed line on the board.
///
/// A line is complete when all three of its cells hold the same mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    Line::iter().find(|line| {
        let [a, b, c] = line.cells();
        let cell = board.get(a);
        !cell.is_empty() && cell == board.get(b) && cell == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| board.get(line.cells()[0]).mark())
}
