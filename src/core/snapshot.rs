//! Deterministic display snapshots
//!
//! Snapshots capture the grid contents and cursor position in a
//! serializable format for testing and the headless runner. Given the
//! same byte stream, the screen must produce identical snapshots.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::{COLS, ROWS};
use super::screen::Screen;

/// Error converting a snapshot to or from JSON.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// JSON serialization or parsing failed
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A snapshot of the display and cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Display dimensions
    pub cols: u8,
    pub rows: u8,
    /// Row contents, top to bottom, trailing blanks trimmed per row
    pub lines: Vec<String>,
    /// Cursor position
    pub cursor_col: u8,
    pub cursor_row: u8,
}

impl Snapshot {
    /// Capture the current screen state.
    pub fn from_screen(screen: &Screen) -> Self {
        let lines = (0..ROWS).map(|row| screen.grid().row_text(row)).collect();
        let cursor = screen.cursor();

        Snapshot {
            cols: COLS,
            rows: ROWS,
            lines,
            cursor_col: cursor.col,
            cursor_row: cursor.row,
        }
    }

    /// Convert snapshot to JSON string.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse snapshot from JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get a simple text representation of the display: one line per
    /// row, trailing blank rows dropped.
    pub fn to_text(&self) -> String {
        let used = self
            .lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map(|i| i + 1)
            .unwrap_or(0);

        let mut result = String::new();
        for line in &self.lines[..used] {
            result.push_str(line);
            result.push('\n');
        }
        result
    }
}
