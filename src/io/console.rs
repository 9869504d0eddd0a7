//! Console surface
//!
//! The POSIX-shaped endpoint pair over a screen and an input source.
//! Reads always come from the input source and writes always go to the
//! screen; descriptors exist for interface compatibility only.

use crate::core::Screen;

use super::input::ByteSource;

/// File descriptor accepted by [`Console::read`] and [`Console::write`].
///
/// The console serves exactly one input and one output endpoint, so the
/// descriptor is never inspected; it keeps call sites in the familiar
/// (fd, buffer, count) shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fd(pub i32);

impl Fd {
    /// Standard input.
    pub const STDIN: Fd = Fd(0);
    /// Standard output.
    pub const STDOUT: Fd = Fd(1);
}

/// The console: a screen coupled with a blocking input source.
#[derive(Debug)]
pub struct Console<S: ByteSource> {
    screen: Screen,
    source: S,
}

impl<S: ByteSource> Console<S> {
    /// Create a console over a blank screen and `source`.
    pub fn new(source: S) -> Self {
        Self {
            screen: Screen::new(),
            source,
        }
    }

    /// Fill `buf` with bytes from the input source, one blocking fetch
    /// per byte, in order.
    ///
    /// Returns `buf.len()` unconditionally; the descriptor is accepted
    /// for interface compatibility and not inspected.
    pub fn read(&mut self, _fd: Fd, buf: &mut [u8]) -> usize {
        for slot in buf.iter_mut() {
            *slot = self.source.next_byte();
        }
        buf.len()
    }

    /// Write every byte of `buf` to the screen, in order.
    ///
    /// Returns `buf.len()` unconditionally; the descriptor is accepted
    /// for interface compatibility and not inspected.
    pub fn write(&mut self, _fd: Fd, buf: &[u8]) -> usize {
        for &ch in buf {
            self.screen.put_char(ch);
        }
        buf.len()
    }

    /// Get a reference to the screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Get a mutable reference to the screen.
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Get a mutable reference to the input source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
