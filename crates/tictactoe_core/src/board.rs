//! The 3x3 board.

use super::coordinate::{Coordinate, SIZE};
use super::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// 3x3 tic-tac-toe board.
///
/// Only the engine writes to a board; callers see `&Board` or an owned copy
/// inside a [`Snapshot`](crate::Snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[coord.index()]
    }

    /// Sets the cell at the given coordinate.
    pub(crate) fn set(&mut self, coord: Coordinate, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.get(coord).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the board as three rows of three cells.
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for coord in Coordinate::ALL {
            rows[coord.row()][coord.col()] = self.get(coord);
        }
        rows
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(player))
            .count()
    }

    /// Returns the coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        Coordinate::ALL
            .into_iter()
            .filter(|coord| self.is_empty(*coord))
            .collect()
    }
}
