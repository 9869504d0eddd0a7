//! Cursor state
//!
//! The cursor is a pair of device-register-width coordinates addressing
//! the cell the next glyph will be stored into. It starts at the origin
//! and carries no display attributes.

use super::geometry::{COLS, ROWS};

/// Cursor position (column, row), 0-indexed from the top-left corner.
///
/// Coordinates are `u8` to match the device's register width, so
/// arithmetic on them is modulo 256. Positions at or beyond the grid
/// edge are representable (see `Screen::set_cursor`); every column wrap
/// and row advance puts the cursor back inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Column position (0-indexed)
    pub col: u8,
    /// Row position (0-indexed)
    pub row: u8,
}

impl Cursor {
    /// Create a cursor at the origin (0, 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Carriage return - move to column 0, keeping the row.
    pub fn carriage_return(&mut self) {
        self.col = 0;
    }

    /// Whether the cursor currently addresses a cell inside the grid.
    pub fn in_bounds(&self) -> bool {
        self.col < COLS && self.row < ROWS
    }
}
