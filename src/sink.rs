//! Stream handles the logger writes to.
//!
//! The logger never opens or closes streams itself: callers supply an open
//! handle and keep a clone for identity-based removal. `Rc` makes the handle
//! deliberately single-threaded: wrap the whole [`Logger`](crate::Logger) in a
//! mutex if multiple threads must log through it.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::rc::Rc;

/// The minimal surface the fan-out writer needs from a destination: write
/// bytes, flush, and say whether a human is watching.
pub trait LogStream: Write {
    /// Whether the stream is attached to an interactive terminal. Colors are
    /// forced off for streams that aren't, so files and pipes never collect
    /// escape sequences.
    fn is_terminal(&self) -> bool;
}

impl LogStream for io::Stdout {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl LogStream for io::Stderr {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl LogStream for File {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

/// In-memory capture, handy as a test sink. Never a terminal.
impl LogStream for Vec<u8> {
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Shared, caller-owned handle to one open stream. Two handles denote the
/// same destination iff they point at the same allocation (`Rc::ptr_eq`).
pub type StreamHandle = Rc<RefCell<dyn LogStream>>;

/// Handle to the process's standard output.
#[must_use]
pub fn stdout() -> StreamHandle {
    Rc::new(RefCell::new(io::stdout()))
}

/// Handle to the process's standard error.
#[must_use]
pub fn stderr() -> StreamHandle {
    Rc::new(RefCell::new(io::stderr()))
}

/// Handle to a file the caller already opened. Reopening the same path yields
/// a distinct handle: identity follows the handle, not the path.
#[must_use]
pub fn file(file: File) -> StreamHandle {
    Rc::new(RefCell::new(file))
}

/// One registered destination: a stream plus its negotiated color flag.
#[derive(Clone)]
pub struct Sink {
    stream: StreamHandle,
    colors: bool,
}

impl Sink {
    pub(crate) fn new(stream: StreamHandle, colors: bool) -> Self {
        Self { stream, colors }
    }

    /// Whether lines written to this sink carry ANSI color sequences.
    #[must_use]
    pub const fn colors(&self) -> bool {
        self.colors
    }

    /// The underlying stream, shared with the caller that registered it.
    #[must_use]
    pub const fn stream(&self) -> &StreamHandle {
        &self.stream
    }

    pub(crate) fn is_handle(&self, handle: &StreamHandle) -> bool {
        Rc::ptr_eq(&self.stream, handle)
    }
}
