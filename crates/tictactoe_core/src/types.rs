//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the player whose mark occupies this cell.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Authoritative status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Board accepts moves.
    InProgress,
    /// A winning line exists; the board is frozen.
    Won(Player),
    /// Board is full with no winning line; the board is frozen.
    Draw,
}

impl GameState {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::InProgress => write!(f, "In progress"),
            GameState::Won(player) => write!(f, "Player {} wins", player),
            GameState::Draw => write!(f, "Draw"),
        }
    }
}
