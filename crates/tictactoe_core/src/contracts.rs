//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} move {Q}`. Preconditions decide whether a move is accepted;
//! postconditions verify the engine after an accepted move.

use super::invariants::{InvariantViolation, check_engine};
use super::{Coordinate, EngineError, GameEngine};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`EngineError::GameAlreadyOver`] in a terminal state.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), EngineError> {
        if engine.state().is_terminal() {
            Err(EngineError::GameAlreadyOver(engine.state()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell holds no mark.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`EngineError::CellOccupied`] if the cell is taken.
    #[instrument(skip(engine))]
    pub fn check(coord: &Coordinate, engine: &GameEngine) -> Result<(), EngineError> {
        if engine.board().is_empty(*coord) {
            Ok(())
        } else {
            Err(EngineError::CellOccupied(*coord))
        }
    }
}

/// Composite precondition: the game is live and the cell is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, reporting the first failure.
    #[instrument(skip(engine))]
    pub fn check(coord: &Coordinate, engine: &GameEngine) -> Result<(), EngineError> {
        GameNotOver::check(engine)?;
        CellIsEmpty::check(coord, engine)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game is in progress
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one cell changed, from empty to the mover's mark
/// - All engine invariants hold
pub struct MoveContract;

impl Contract<GameEngine, Coordinate> for MoveContract {
    fn pre(engine: &GameEngine, coord: &Coordinate) -> Result<(), EngineError> {
        LegalMove::check(coord, engine)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = check_engine(after).err().unwrap_or_default();

        let changed: Vec<Coordinate> = Coordinate::ALL
            .into_iter()
            .filter(|coord| before.board().get(*coord) != after.board().get(*coord))
            .collect();
        let single_mark = match changed.as_slice() {
            [coord] => {
                before.board().is_empty(*coord)
                    && after.board().get(*coord).mark() == Some(before.to_move)
            }
            _ => false,
        };
        if !single_mark {
            violations.push(InvariantViolation::new(
                "A move places exactly one mark, for the player to move",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Asserts the move postconditions (panics on violation in debug builds).
#[cfg(debug_assertions)]
#[instrument(skip_all)]
pub fn assert_postconditions(before: &GameEngine, after: &GameEngine) {
    if let Err(violations) = MoveContract::post(before, after) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::warn!(%descriptions, "Move postcondition failed");
        debug_assert!(false, "Postcondition failed: {}", descriptions);
    }
}
