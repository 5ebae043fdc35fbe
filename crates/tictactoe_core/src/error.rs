//! Errors reported when a move is rejected.

use super::coordinate::Coordinate;
use super::types::GameState;

/// Error that can occur when applying a move.
///
/// Every variant is deterministic and recoverable; a rejected move leaves the
/// engine exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Row or column outside `0..3`.
    #[display("Coordinate ({}, {}) is outside the 3x3 board", row, col)]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coordinate),

    /// The game reached a terminal state; only a reset accepts input now.
    #[display("Game is already over: {}", _0)]
    GameAlreadyOver(GameState),
}

impl std::error::Error for EngineError {}
