//! Console I/O Module
//!
//! The host-facing side of the crate: the blocking input seam, the
//! raw-mode stdin source, and the descriptor-shaped console surface.

mod console;
mod input;
mod stdin;

pub use console::{Console, Fd};
pub use input::{ByteSource, QueuedSource};
pub use stdin::{InputError, StdinSource};
