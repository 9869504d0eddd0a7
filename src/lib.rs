//! Console I/O Library
//!
//! A character console for a fixed 80x60 memory-mapped text display,
//! built without any terminal emulation libraries. This crate provides:
//!
//! - `core`: Display grid, cursor, output path, snapshots
//! - `io`: Input sources, raw-mode stdin, the read/write console surface
//!
//! The display geometry is a property of the device: 80 columns by 60
//! rows of one-byte cells, addressed row-major. Writes interpret exactly
//! one control byte (line feed); everything else is stored verbatim.
//! Reads and writes always transfer the full requested count.

pub mod core;
pub mod io;
