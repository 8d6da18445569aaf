//! Client-side view of the 3x3 board: a fixed grid of labelable,
//! enable/disable-able cells, decoupled from any rendering toolkit.

use crate::common::{Cell, GridError};
use crate::config::{GRID_SIZE, NUM_CELLS};
use core::fmt;

/// Validated flat cell index, row-major (`index = row * 3 + col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellIndex(u8);

impl CellIndex {
    pub fn new(index: u8) -> Result<Self, GridError> {
        if (index as usize) < NUM_CELLS {
            Ok(CellIndex(index))
        } else {
            Err(GridError::InvalidIndex)
        }
    }

    pub fn from_coords(row: usize, col: usize) -> Result<Self, GridError> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Ok(CellIndex((row * GRID_SIZE + col) as u8))
        } else {
            Err(GridError::InvalidIndex)
        }
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.0 as usize / GRID_SIZE
    }

    pub fn col(self) -> usize {
        self.0 as usize % GRID_SIZE
    }
}

impl TryFrom<u8> for CellIndex {
    type Error = GridError;

    fn try_from(index: u8) -> Result<Self, GridError> {
        CellIndex::new(index)
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cell as the UI sees it: its label plus whether it accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub mark: Cell,
    pub enabled: bool,
}

impl CellView {
    fn empty() -> Self {
        CellView {
            mark: Cell::Empty,
            enabled: true,
        }
    }
}

/// The full grid of nine cells, addressable by flat index or (row, col).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [CellView; NUM_CELLS],
}

impl Grid {
    /// Create an all-empty grid with every cell enabled.
    pub fn new() -> Self {
        Grid {
            cells: [CellView::empty(); NUM_CELLS],
        }
    }

    pub fn cell(&self, index: CellIndex) -> CellView {
        self.cells[index.as_usize()]
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellView, GridError> {
        Ok(self.cell(CellIndex::from_coords(row, col)?))
    }

    /// Set a cell's label. The cell stays enabled only while empty.
    pub fn set(&mut self, index: CellIndex, mark: Cell) {
        self.cells[index.as_usize()] = CellView {
            mark,
            enabled: mark.is_empty(),
        };
    }

    /// Lock the whole board against further input.
    pub fn disable_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.enabled = false;
        }
    }

    /// Return every cell to empty-and-enabled.
    pub fn reset(&mut self) {
        self.cells = [CellView::empty(); NUM_CELLS];
    }

    pub fn cells(&self) -> &[CellView; NUM_CELLS] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}
