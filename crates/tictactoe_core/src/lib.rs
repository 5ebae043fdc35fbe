//! Tic-tac-toe game engine.
//!
//! Pure game logic with no I/O: a fixed 3x3 board, alternating turns,
//! win and draw detection, and a reset flow. A presentation layer drives
//! the engine with [`GameEngine::apply_move`] and [`GameEngine::reset`] and
//! renders the [`Snapshot`] it gets back.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, GameState, Player};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     engine.apply_move(row, col)?;
//! }
//! assert_eq!(engine.apply_move(0, 2)?, GameState::Won(Player::X));
//! assert!(engine.apply_move(2, 2).is_err());
//!
//! engine.reset();
//! assert_eq!(engine.current_player(), Some(Player::X));
//! # Ok::<(), tictactoe_core::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod contracts;
mod coordinate;
mod engine;
mod error;
mod invariants;
pub mod rules;
mod snapshot;
mod types;

pub use board::Board;
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};
pub use coordinate::{Coordinate, SIZE};
pub use engine::GameEngine;
pub use error::EngineError;
pub use invariants::{
    EngineInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    StatusMatchesBoardInvariant, TurnMatchesBoardInvariant,
};
pub use rules::Line;
pub use snapshot::Snapshot;
pub use types::{Cell, GameState, Player};
