//! The tic-tac-toe game engine.

#[cfg(debug_assertions)]
use super::contracts::assert_postconditions;
use super::contracts::{Contract, MoveContract};
use super::{Board, Coordinate, EngineError, GameState, Line, Player, Snapshot, rules};
use tracing::{debug, info, instrument};

/// Owns the board and turn state, validates moves and reports the outcome.
///
/// A new engine is ready for play: the board is empty, X moves first and the
/// state is [`GameState::InProgress`]. Every accepted move places exactly one
/// mark; rejected moves change nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) state: GameState,
    pub(crate) to_move: Player,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::InProgress,
            to_move: Player::X,
        }
    }

    /// Clears the board, gives the move to X and resumes play.
    ///
    /// Safe to call in any state, any number of times.
    #[instrument(skip(self), fields(previous = ?self.state))]
    pub fn reset(&mut self) -> Snapshot {
        *self = Self::new();
        info!("Game reset");
        self.current_state()
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns the resulting game state on success.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameAlreadyOver`] if the game is won or drawn
    /// - [`EngineError::InvalidCoordinate`] if `row` or `col` is not in `0..3`
    /// - [`EngineError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameState, EngineError> {
        if self.state.is_terminal() {
            return Err(EngineError::GameAlreadyOver(self.state));
        }
        let coord = Coordinate::new(row, col)?;
        self.apply(coord)
    }

    /// Places the current player's mark at an already-validated coordinate.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`], minus the range check.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn apply(&mut self, coord: Coordinate) -> Result<GameState, EngineError> {
        MoveContract::pre(self, &coord)?;

        #[cfg(debug_assertions)]
        let before = *self;

        let player = self.to_move;
        self.board.set(coord, player.into());
        self.to_move = player.opponent();
        self.state = rules::evaluate(&self.board);

        #[cfg(debug_assertions)]
        assert_postconditions(&before, self);

        match self.state {
            GameState::InProgress => debug!(%coord, next = ?self.to_move, "Move accepted"),
            outcome => info!(%coord, %outcome, "Game finished"),
        }

        Ok(self.state)
    }

    /// Returns a snapshot of the board, status and player to move.
    pub fn current_state(&self) -> Snapshot {
        Snapshot::new(
            self.board,
            self.state,
            self.current_player(),
            self.winning_line(),
        )
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            GameState::InProgress => Some(self.to_move),
            _ => None,
        }
    }

    /// Returns the coordinates that would currently accept a move.
    pub fn valid_moves(&self) -> Vec<Coordinate> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells()
    }

    /// Returns the completed line if the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.state {
            GameState::Won(_) => rules::winning_line(&self.board),
            _ => None,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
