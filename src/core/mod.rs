//! Display Core Module
//!
//! Platform-independent state for the fixed 80x60 character display:
//! - Grid storage (one byte per cell, row-major)
//! - Cursor state and positioning
//! - The output path: glyph stores, column wrap, scrolling row advance
//! - Deterministic snapshot generation
//!
//! The core is completely deterministic: given the same sequence of
//! writes, it will always produce the same state.

mod cursor;
mod geometry;
mod grid;
mod screen;
mod snapshot;

pub use cursor::Cursor;
pub use geometry::{BLANK, CELLS, COLS, LINE_FEED, ROWS};
pub use grid::Grid;
pub use screen::Screen;
pub use snapshot::{Snapshot, SnapshotError};
