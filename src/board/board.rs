//! Board structure with terminal-state queries

use std::fmt;

use super::{Cell, Mark, Outcome, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::GameError;
use crate::rules::check_winner;

/// Game board: 3x3 cells in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from row-major cells
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a mark on an empty cell.
    ///
    /// Occupied or out-of-range cells are rejected and the board is left
    /// untouched.
    pub fn set(&mut self, pos: Pos, mark: Mark) -> Result<(), GameError> {
        if !pos.in_bounds() || !self.is_empty_at(pos) {
            return Err(GameError::InvalidMove {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[pos.to_index()] = mark.to_cell();
        Ok(())
    }

    /// Reset a cell to empty (search backtracking)
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// Empty cells in row-major order
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| Pos::from_index(idx))
            .collect()
    }

    #[inline]
    pub fn winner(&self) -> Outcome {
        check_winner(self)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Number of marks on the board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.mark_count() == 0
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; TOTAL_CELLS];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
