//! Turn invariant: the player to move follows from the marks on the board.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: X is to move exactly when both players have the same number of marks.
pub struct TurnMatchesBoardInvariant;

impl Invariant<GameEngine> for TurnMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let expected = if board.count(Player::X) == board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        engine.to_move == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
