//! Board coordinates for tic-tac-toe moves.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// A validated (row, column) position on the board.
///
/// Both components are always in `0..3`; the only ways to build one are
/// [`Coordinate::new`], [`Coordinate::from_index`] and the [`Coordinate::ALL`]
/// table, so holding a `Coordinate` means the bounds check already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Creates a coordinate, rejecting rows or columns outside `0..3`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] if either component is out of range.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= SIZE || col >= SIZE {
            return Err(EngineError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row (0 = top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0 = left).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Creates a coordinate from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// All 9 coordinates in row-major order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate { row: 0, col: 0 },
        Coordinate { row: 0, col: 1 },
        Coordinate { row: 0, col: 2 },
        Coordinate { row: 1, col: 0 },
        Coordinate { row: 1, col: 1 },
        Coordinate { row: 1, col: 2 },
        Coordinate { row: 2, col: 0 },
        Coordinate { row: 2, col: 1 },
        Coordinate { row: 2, col: 2 },
    ];

    /// Get label for this coordinate (for display).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }

    /// Parses a coordinate from its label (case-insensitive).
    ///
    /// Spaces and underscores are accepted in place of the hyphen, so
    /// `"top left"`, `"TOP_LEFT"` and `"top-left"` all resolve to the same cell.
    #[instrument]
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Self::ALL
            .into_iter()
            .find(|coord| coord.label().to_ascii_lowercase() == wanted)
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = EngineError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}
