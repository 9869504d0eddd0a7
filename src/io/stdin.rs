//! Host stdin as the input device
//!
//! `StdinSource` reads single bytes from the process's stdin, switched
//! to non-canonical mode (no line buffering, no echo) for the lifetime
//! of the source. The original terminal attributes are restored on drop.

use std::io;
use std::os::unix::io::AsRawFd;

use nix::errno::Errno;
use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};
use nix::unistd;
use thiserror::Error;
use tracing::debug;

use super::input::ByteSource;

/// Error configuring the controlling terminal.
#[derive(Debug, Error)]
pub enum InputError {
    /// Querying or changing terminal attributes failed
    #[error("terminal attribute error: {0}")]
    Termios(#[from] Errno),
}

/// Blocking single-byte input from stdin.
///
/// On construction the terminal is put into non-canonical mode with
/// echo off and VMIN=1/VTIME=0, so each fetch blocks for exactly one
/// byte. When stdin is not a terminal (piped input) there is nothing
/// to configure and reads go through as-is.
///
/// The byte contract has no error path: once stdin is exhausted or
/// fails, every subsequent fetch yields NUL.
pub struct StdinSource {
    /// Attributes to restore on drop; `None` when stdin is not a tty
    original: Option<Termios>,
    /// Latched once stdin hits end of input or an unrecoverable error
    exhausted: bool,
}

impl StdinSource {
    /// Create the source, entering non-canonical mode if stdin is a tty.
    pub fn new() -> Result<Self, InputError> {
        let original = match termios::tcgetattr(io::stdin()) {
            Ok(attrs) => Some(attrs),
            // Piped input: no terminal to configure or restore
            Err(Errno::ENOTTY) => None,
            Err(e) => return Err(InputError::Termios(e)),
        };

        if let Some(original) = &original {
            let mut raw = original.clone();

            // Disable canonical mode and echo. ISIG stays on: Ctrl-C
            // must still reach the host program.
            raw.local_flags.remove(LocalFlags::ICANON);
            raw.local_flags.remove(LocalFlags::ECHO);

            // One byte at a time, no read timeout
            raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
            raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;

            termios::tcsetattr(io::stdin(), SetArg::TCSANOW, &raw)?;
            debug!("Entered non-canonical mode (echo off, VMIN=1)");
        }

        Ok(Self {
            original,
            exhausted: false,
        })
    }
}

impl ByteSource for StdinSource {
    fn next_byte(&mut self) -> u8 {
        if self.exhausted {
            return 0;
        }

        let mut byte = [0u8; 1];
        loop {
            match unistd::read(io::stdin().as_raw_fd(), &mut byte) {
                Ok(0) => {
                    debug!("End of input on stdin, yielding NUL");
                    self.exhausted = true;
                    return 0;
                }
                Ok(_) => return byte[0],
                Err(Errno::EINTR) => continue,
                Err(e) => {
                    debug!("Read error on stdin ({}), yielding NUL", e);
                    self.exhausted = true;
                    return 0;
                }
            }
        }
    }
}

impl Drop for StdinSource {
    fn drop(&mut self) {
        if let Some(original) = &self.original {
            let _ = termios::tcsetattr(io::stdin(), SetArg::TCSANOW, original);
            debug!("Restored terminal attributes");
        }
    }
}
