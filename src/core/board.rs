use serde::{Deserialize, Serialize};

use super::types::{Coord, Mark};

pub const BOARD_SIZE: usize = 3;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Cell {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// 3x3 board state.
///
/// Implements `Copy` since it is only nine cells; the search mutates a
/// single board in place (place, recurse, clear) rather than copying per
/// node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE * BOARD_SIZE],
        }
    }

    fn index(coord: Coord) -> usize {
        debug_assert!(coord.row < BOARD_SIZE && coord.col < BOARD_SIZE);
        coord.row * BOARD_SIZE + coord.col
    }

    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[Self::index(coord)]
    }

    /// Place `mark` on an empty cell.
    ///
    /// Placing on an occupied cell is a caller bug and panics rather than
    /// silently corrupting the position.
    pub fn place(&mut self, coord: Coord, mark: Mark) {
        let idx = Self::index(coord);
        assert_eq!(
            self.cells[idx],
            Cell::Empty,
            "place on occupied cell {coord}"
        );
        self.cells[idx] = Cell::from(mark);
    }

    /// Reset a cell to empty. Undoes a trial `place` during search; every
    /// `place` in the search is paired with a `clear` on the same coord.
    pub fn clear(&mut self, coord: Coord) {
        self.cells[Self::index(coord)] = Cell::Empty;
    }

    /// All empty coordinates in row-major order.
    ///
    /// The order is part of the search contract: it fixes the traversal
    /// order of the game tree and makes tied-move sets reproducible.
    pub fn empty_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col);
                if self.get(coord) == Cell::Empty {
                    cells.push(coord);
                }
            }
        }
        cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
