//! Board module - manages the game grid
//!
//! The board is a 10x40 grid where each cell holds a [`CellKind`].
//! Storage is an array of rows so a line clear is a row move rather than a
//! per-cell copy.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..39
//! (bottom to top). Row 0 is the floor.

use crate::types::{CellKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One board row, indexed by x
pub type Row = [CellKind; WIDTH];

const EMPTY_ROW: Row = [CellKind::Empty; WIDTH];

/// The game board - 10 columns x 40 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Rows bottom to top
    rows: [Row; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; HEIGHT],
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y). Panics on out-of-range coordinates; callers derive them from
    /// piece geometry that has already been bounds-checked.
    #[inline]
    pub fn cell_at(&self, x: usize, y: usize) -> CellKind {
        self.rows[y][x]
    }

    /// Overwrite the cell at (x, y). Same bounds contract as [`Board::cell_at`].
    #[inline]
    pub fn set_cell(&mut self, x: usize, y: usize, kind: CellKind) {
        self.rows[y][x] = kind;
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<CellKind> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(CellKind::Empty))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(cell) if !cell.is_empty())
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows[y].iter().all(|cell| !cell.is_empty())
    }

    /// Remove row `y`, shift every row above it down by one and put an empty row
    /// on top. A full row that slides into `y` is not cleared by this call.
    pub fn clear_row(&mut self, y: usize) {
        self.rows.copy_within(y + 1.., y);
        self.rows[HEIGHT - 1] = EMPTY_ROW;
    }

    /// Clear every full row, scanning bottom to top.
    /// Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        for y in 0..HEIGHT {
            // The same index is re-checked after each clear since the row above
            // has moved into it.
            while self.is_row_full(y) {
                self.clear_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// Write a locked piece's minos onto the board
    pub fn stamp(&mut self, minos: &[(i8, i8)], kind: CellKind) {
        for &(x, y) in minos {
            self.set_cell(x as usize, y as usize, kind);
        }
    }

    /// Fill an entire row with one kind (e.g. garbage)
    pub fn fill_row(&mut self, y: usize, kind: CellKind) {
        self.rows[y] = [kind; WIDTH];
    }

    /// Rows bottom to top
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Write the board as snapshot cell codes, bottom row first
    pub fn write_u8_rows(&self, out: &mut Vec<[u8; WIDTH]>) {
        out.clear();
        out.extend(self.rows.iter().map(|row| row.map(CellKind::code)));
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.rows = [EMPTY_ROW; HEIGHT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
