//! The eight winning lines.

use crate::Coordinate;
use serde::{Deserialize, Serialize};

/// A row, column or diagonal that wins when filled with one player's marks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Line {
    /// Row 0.
    #[strum(to_string = "top row")]
    TopRow,
    /// Row 1.
    #[strum(to_string = "middle row")]
    MiddleRow,
    /// Row 2.
    #[strum(to_string = "bottom row")]
    BottomRow,
    /// Column 0.
    #[strum(to_string = "left column")]
    LeftColumn,
    /// Column 1.
    #[strum(to_string = "center column")]
    CenterColumn,
    /// Column 2.
    #[strum(to_string = "right column")]
    RightColumn,
    /// Top-left to bottom-right.
    #[strum(to_string = "main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[strum(to_string = "anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Returns the three cells that make up this line.
    pub fn cells(self) -> [Coordinate; 3] {
        // Row-major indices into Coordinate::ALL
        let [a, b, c] = match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::CenterColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::MainDiagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        };
        [Coordinate::ALL[a], Coordinate::ALL[b], Coordinate::ALL[c]]
    }

    /// Checks whether the line passes through `coord`.
    pub fn contains(self, coord: Coordinate) -> bool {
        self.cells().contains(&coord)
    }
}
