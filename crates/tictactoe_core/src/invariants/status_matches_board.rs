//! Status invariant: the stored game state is what the board implies.

use super::Invariant;
use crate::{GameEngine, rules};
use tracing::warn;

/// Invariant: `engine.state() == rules::evaluate(engine.board())`.
pub struct StatusMatchesBoardInvariant;

impl Invariant<GameEngine> for StatusMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let expected = rules::evaluate(engine.board());
        let valid = engine.state() == expected;
        if !valid {
            warn!(stored = ?engine.state(), ?expected, "Game state out of sync with board");
        }
        valid
    }

    fn description() -> &'static str {
        "Game state matches the board"
    }
}
