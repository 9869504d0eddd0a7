//! Screen driver
//!
//! The screen couples the display grid with the cursor and implements
//! the output path: glyph stores, newline handling, column wrap, and
//! the scrolling row advance. Every operation here returns with the
//! cursor inside the grid; `set_cursor` is the one documented exception.

use tracing::trace;

use super::cursor::Cursor;
use super::geometry::{COLS, LINE_FEED, ROWS};
use super::grid::Grid;

/// The screen: display grid plus cursor.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    grid: Grid,
    cursor: Cursor,
}

impl Screen {
    /// Create a blank screen with the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a reference to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the cursor position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Write one byte at the cursor.
    ///
    /// A line feed moves the cursor to column 0 of the next row. Any
    /// other byte is stored at the cursor cell and advances the column.
    /// A column that reaches the right edge wraps to column 0 and
    /// advances the row; a row advance past the bottom scrolls the grid.
    pub fn put_char(&mut self, ch: u8) {
        match ch {
            LINE_FEED => {
                self.cursor.carriage_return();
                self.line_feed();
            }
            _ => {
                self.store_glyph(ch);
                self.cursor.col = self.cursor.col.wrapping_add(1);
            }
        }

        if self.cursor.col >= COLS {
            self.cursor.carriage_return();
            self.line_feed();
        }
    }

    /// Advance the cursor one row. At the bottom row the grid scrolls
    /// up instead and the cursor stays on the bottom row.
    pub fn line_feed(&mut self) {
        self.cursor.row = self.cursor.row.wrapping_add(1);
        if self.cursor.row >= ROWS {
            trace!("Bottom row reached, scrolling");
            self.grid.scroll_up();
            self.cursor.row = ROWS - 1;
        }
    }

    /// Set the cursor position directly.
    ///
    /// Coordinates are not validated: the values are stored verbatim,
    /// matching the device's register semantics. Glyphs written through
    /// an out-of-range cursor are discarded until a column wrap or row
    /// advance brings the cursor back inside the grid.
    pub fn set_cursor(&mut self, col: u8, row: u8) {
        self.cursor.col = col;
        self.cursor.row = row;
    }

    /// Set the cursor, then write one byte there.
    pub fn put_char_at(&mut self, col: u8, row: u8, ch: u8) {
        self.set_cursor(col, row);
        self.put_char(ch);
    }

    /// Blank the grid and home the cursor.
    pub fn reset(&mut self) {
        self.grid.fill_blank();
        self.cursor = Cursor::new();
    }

    /// Store a glyph at the cursor cell. An out-of-range cursor
    /// addresses no cell and the glyph is dropped.
    fn store_glyph(&mut self, ch: u8) {
        let Cursor { col, row } = self.cursor;
        match self.grid.cell_mut(col, row) {
            Some(cell) => *cell = ch,
            None => trace!("Glyph at ({}, {}) outside the grid, discarded", col, row),
        }
    }
}
