//! Input sources
//!
//! The input side of the console reduces to one primitive: fetch the
//! next byte, blocking until one is available. The contract has no
//! error path, so a source that can run dry substitutes a NUL byte.

use std::collections::VecDeque;

/// A blocking single-byte input source.
pub trait ByteSource {
    /// Fetch the next byte, blocking until one is available.
    fn next_byte(&mut self) -> u8;
}

/// A scripted source that yields queued bytes in order.
///
/// Stands in for the keyboard in tests and the headless runner. Once
/// drained it yields NUL.
#[derive(Debug, Clone, Default)]
pub struct QueuedSource {
    queue: VecDeque<u8>,
}

impl QueuedSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source preloaded with `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            queue: bytes.iter().copied().collect(),
        }
    }

    /// Append a byte to the back of the queue.
    pub fn push(&mut self, byte: u8) {
        self.queue.push_back(byte);
    }

    /// Number of bytes still queued.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ByteSource for QueuedSource {
    fn next_byte(&mut self) -> u8 {
        self.queue.pop_front().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queued_source_order() {
        let mut source = QueuedSource::from_bytes(b"abc");

        assert_eq!(source.next_byte(), b'a');
        assert_eq!(source.next_byte(), b'b');
        assert_eq!(source.next_byte(), b'c');
    }

    #[test]
    fn test_queued_source_drained_yields_nul() {
        let mut source = QueuedSource::from_bytes(b"x");
        source.next_byte();

        assert_eq!(source.next_byte(), 0);
        assert_eq!(source.next_byte(), 0);
    }

    #[test]
    fn test_queued_source_push() {
        let mut source = QueuedSource::new();
        assert_eq!(source.remaining(), 0);

        source.push(b'k');
        source.push(b'l');
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_byte(), b'k');
        assert_eq!(source.remaining(), 1);
    }
}
