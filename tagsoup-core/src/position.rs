//! Line/column tracking over consumed input.
//!
//! The tokenizer only ever advances a [`Position`] over spans it has just
//! consumed, so the total cost of tracking is linear in the input size.

use memchr::{memchr_iter, memrchr};
use std::fmt;

/// A human-facing location in the fed text.
///
/// `line` is 1-based. `column` is the number of characters consumed since the
/// last line break (0 at the start of a line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Position before any input has been consumed.
    pub const START: Position = Position { line: 1, column: 0 };

    /// Create a position from explicit coordinates.
    #[inline]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Advance over a span that was just consumed.
    ///
    /// Line breaks are `\n` only; a `\r\n` pair counts as one break.
    pub fn advance(&mut self, span: &str) {
        let bytes = span.as_bytes();
        match memrchr(b'\n', bytes) {
            Some(last) => {
                self.line += memchr_iter(b'\n', bytes).count();
                self.column = span[last + 1..].chars().count();
            }
            None => self.column += span.chars().count(),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
