//! Read-only view of an engine handed to the presentation layer.

use super::{Board, Cell, Coordinate, GameState, Line, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Owned copy of the board, status and player to move.
///
/// Holding a snapshot never lets a caller change the engine it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// Game status.
    state: GameState,
    /// Player to move; `None` once the game is over.
    current_player: Option<Player>,
    /// Completed line when the game is won.
    winning_line: Option<Line>,
}

impl Snapshot {
    pub(crate) fn new(
        board: Board,
        state: GameState,
        current_player: Option<Player>,
        winning_line: Option<Line>,
    ) -> Self {
        Self {
            board,
            state,
            current_player,
            winning_line,
        }
    }

    /// Shorthand for the cell at `coord`.
    pub fn cell(&self, coord: Coordinate) -> Cell {
        self.board.get(coord)
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match (self.state, self.current_player) {
            (GameState::InProgress, Some(player)) => {
                format!("In progress. Player {} to move.", player)
            }
            (GameState::InProgress, None) => "In progress.".to_string(),
            (GameState::Won(player), _) => format!("Game over. Player {} wins!", player),
            (GameState::Draw, _) => "Game over. Draw!".to_string(),
        }
    }
}
