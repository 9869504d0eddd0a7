//! Display grid
//!
//! A fixed 80x60 region of one-byte cells, stored as a single linear
//! array addressed row-major, the way the device maps it. There is no
//! resizing and no per-cell attribute state.

use super::geometry::{cell_index, BLANK, CELLS, COLS, ROWS};

/// The display grid: one byte per cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cell storage, `ROWS` rows of `COLS` bytes each
    cells: [u8; CELLS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create a blank grid.
    pub fn new() -> Self {
        Self {
            cells: [BLANK; CELLS],
        }
    }

    /// Get the byte stored at a cell.
    pub fn cell(&self, col: u8, row: u8) -> Option<u8> {
        if col < COLS && row < ROWS {
            Some(self.cells[cell_index(col, row)])
        } else {
            None
        }
    }

    /// Get a mutable reference to a cell.
    pub fn cell_mut(&mut self, col: u8, row: u8) -> Option<&mut u8> {
        if col < COLS && row < ROWS {
            Some(&mut self.cells[cell_index(col, row)])
        } else {
            None
        }
    }

    /// Get a row as a byte slice.
    pub fn row(&self, row: u8) -> Option<&[u8]> {
        if row < ROWS {
            let start = cell_index(0, row);
            Some(&self.cells[start..start + COLS as usize])
        } else {
            None
        }
    }

    /// Blank-fill every cell.
    pub fn fill_blank(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Scroll the grid up one row: rows 1..60 move onto rows 0..59 as a
    /// single block move, and the bottom row is blanked.
    pub fn scroll_up(&mut self) {
        self.cells.copy_within(COLS as usize.., 0);
        let bottom = cell_index(0, ROWS - 1);
        self.cells[bottom..].fill(BLANK);
    }

    /// Render a row as text with trailing blanks trimmed.
    pub fn row_text(&self, row: u8) -> String {
        let Some(cells) = self.row(row) else {
            return String::new();
        };
        let text: String = cells.iter().map(|&b| char::from(b)).collect();
        text.trim_end_matches(' ').to_string()
    }
}
