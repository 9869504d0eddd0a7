//! Fixed display geometry
//!
//! The display is a memory-mapped text device: 80 columns by 60 rows of
//! one-byte cells, addressed row-major. The dimensions are properties of
//! the device, not configuration.

/// Number of character columns.
pub const COLS: u8 = 80;

/// Number of character rows.
pub const ROWS: u8 = 60;

/// Total number of cells in the display region.
pub const CELLS: usize = COLS as usize * ROWS as usize;

/// The byte a blank cell holds.
pub const BLANK: u8 = b' ';

/// The one control byte the output path interprets.
pub const LINE_FEED: u8 = b'\n';

/// Linear index of a cell: `row * COLS + col`.
#[inline]
pub const fn cell_index(col: u8, row: u8) -> usize {
    row as usize * COLS as usize + col as usize
}
