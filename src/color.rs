//! Named ANSI foreground colors used for level labels.
//!
//! Sticks to the classic 16-color palette so output renders the same on every
//! terminal, including ones without true-color support.

/// A dedicated type keeps escape sequences out of call sites and documents
/// color intent at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// The raw `\x1b[3Nm` foreground escape, so callers never hand-build it.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
        }
    }
}
