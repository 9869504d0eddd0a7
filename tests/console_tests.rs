//! End-to-end tests for the console surface
//!
//! These tests drive byte streams through the read/write surface and
//! assert on the resulting display state, including the wrap and scroll
//! behavior at the display edges.

use std::io::Write;

use conio::core::{Cursor, Snapshot, BLANK};
use conio::io::{Console, Fd, QueuedSource};

use proptest::prelude::*;

/// Row contents as trimmed text
fn row_text(console: &Console<QueuedSource>, row: u8) -> String {
    console.screen().grid().row_text(row)
}

#[test]
fn test_write_fills_rows() {
    let mut console = Console::new(QueuedSource::new());

    let n = console.write(Fd::STDOUT, b"Line1\nLine2");

    assert_eq!(n, 11);
    assert_eq!(row_text(&console, 0), "Line1");
    assert_eq!(row_text(&console, 1), "Line2");
    assert_eq!(console.screen().cursor(), Cursor { col: 5, row: 1 });
}

#[test]
fn test_line_wrapping() {
    let mut console = Console::new(QueuedSource::new());

    // 85 bytes on an 80-column display wrap onto the next row
    let input = vec![b'A'; 85];
    console.write(Fd::STDOUT, &input);

    assert_eq!(row_text(&console, 0).len(), 80);
    assert_eq!(row_text(&console, 1).len(), 5);
    assert_eq!(console.screen().cursor(), Cursor { col: 5, row: 1 });
}

#[test]
fn test_write_at_bottom_right_corner_scrolls() {
    let mut console = Console::new(QueuedSource::new());

    console.screen_mut().set_cursor(79, 59);
    let n = console.write(Fd::STDOUT, b"X");

    assert_eq!(n, 1);
    // The glyph landed at (79, 59) before the wrap scrolled its row up
    assert_eq!(console.screen().grid().cell(79, 58), Some(b'X'));
    assert!(console
        .screen()
        .grid()
        .row(59)
        .unwrap()
        .iter()
        .all(|&b| b == BLANK));
    assert_eq!(console.screen().cursor(), Cursor { col: 0, row: 59 });
}

#[test]
fn test_display_scrolls_past_bottom() {
    let mut console = Console::new(QueuedSource::new());

    // 61 numbered lines on a 60-row display: the first line scrolls off
    for i in 0..61 {
        let line = format!("L{:02}\n", i);
        console.write(Fd::STDOUT, line.as_bytes());
    }

    assert_eq!(row_text(&console, 0), "L02");
    assert_eq!(row_text(&console, 58), "L60");
    assert_eq!(row_text(&console, 59), "");
    assert_eq!(console.screen().cursor(), Cursor { col: 0, row: 59 });
}

#[test]
fn test_positioned_stream() {
    let mut console = Console::new(QueuedSource::new());

    console.screen_mut().set_cursor(10, 5);
    console.write(Fd::STDOUT, b"mid-screen");

    assert_eq!(row_text(&console, 5), "          mid-screen");
    assert_eq!(console.screen().cursor(), Cursor { col: 20, row: 5 });
}

#[test]
fn test_read_then_write_echo() {
    let mut console = Console::new(QueuedSource::from_bytes(b"echoed input\n"));
    let mut buf = [0u8; 13];

    let got = console.read(Fd::STDIN, &mut buf);
    let put = console.write(Fd::STDOUT, &buf[..got]);

    assert_eq!(got, 13);
    assert_eq!(put, 13);
    assert_eq!(row_text(&console, 0), "echoed input");
    assert_eq!(console.screen().cursor(), Cursor { col: 0, row: 1 });
}

#[test]
fn test_read_exact_count_past_script() {
    let mut console = Console::new(QueuedSource::from_bytes(b"ab"));
    let mut buf = [0xFFu8; 4];

    // The request is larger than the script; NUL fills the rest
    let n = console.read(Fd::STDIN, &mut buf);

    assert_eq!(n, 4);
    assert_eq!(&buf, b"ab\0\0");
}

#[test]
fn test_snapshot_file_roundtrip() {
    let mut console = Console::new(QueuedSource::new());
    console.write(Fd::STDOUT, b"persisted\nstate");

    let snapshot = Snapshot::from_screen(console.screen());
    let json = snapshot.to_json().unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let read_back = std::fs::read_to_string(file.path()).unwrap();
    let restored = Snapshot::from_json(&read_back).unwrap();

    assert_eq!(snapshot, restored);
    assert_eq!(restored.lines[0], "persisted");
    assert_eq!(restored.lines[1], "state");
}

proptest! {
    #[test]
    fn write_keeps_cursor_in_grid(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let mut console = Console::new(QueuedSource::new());

        let n = console.write(Fd::STDOUT, &bytes);

        prop_assert_eq!(n, bytes.len());
        prop_assert!(console.screen().cursor().in_bounds());
    }

    #[test]
    fn read_drains_script_in_order(bytes in proptest::collection::vec(any::<u8>(), 1..512)) {
        let mut console = Console::new(QueuedSource::from_bytes(&bytes));
        let mut buf = vec![0u8; bytes.len()];

        let n = console.read(Fd::STDIN, &mut buf);

        prop_assert_eq!(n, bytes.len());
        prop_assert_eq!(&buf, &bytes);
    }
}
