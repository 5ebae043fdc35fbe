//! Mark balance invariant: X never trails O and never leads by more than one.

use super::Invariant;
use crate::{GameEngine, Player};
use tracing::warn;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X moves first and every move places exactly one mark, so any other
/// difference means a cell was written outside of a move.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x_count = engine.board().count(Player::X);
        let o_count = engine.board().count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
