//! Stream buffer: fed-but-unconsumed text plus the scan cursor.
//!
//! Input arrives in arbitrary chunks and is appended here. The scanner moves
//! the cursor forward as tokens are recognized; after each scan pass the
//! consumed prefix is dropped so nothing is scanned twice.
//!
//! ```text
//!   data:  [ consumed ........ | unconsumed ............ ]
//!          0                offset                     len
//! ```
//!
//! All offsets are byte offsets into `data`. The scanner only moves the cursor
//! to positions it found by searching for ASCII markers (`<`, `>`, `-->`,
//! `</name>`) or to the end of the buffer, so the cursor always sits on a
//! `char` boundary.

use memchr::{memchr, memmem};
use std::ops::Range;

/// Owned, growable text buffer with a consumption cursor.
#[derive(Debug, Default, Clone)]
pub struct StreamBuffer {
    data: String,
    offset: usize,
}

impl StreamBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: String::with_capacity(capacity),
            offset: 0,
        }
    }

    /// Append a chunk to the end of the buffer.
    #[inline]
    pub fn push(&mut self, chunk: &str) {
        self.data.push_str(chunk);
    }

    /// The whole buffer, consumed prefix included.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Text that has not been consumed yet.
    #[inline]
    pub fn remaining(&self) -> &str {
        &self.data[self.offset..]
    }

    /// Current cursor position.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total length of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when there is no unconsumed text left.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Check if the buffer holds no text at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move the cursor to `end`, returning the span that was consumed.
    ///
    /// `end` is clamped to the buffer length and never moves the cursor
    /// backwards.
    pub fn consume_to(&mut self, end: usize) -> Range<usize> {
        let end = end.clamp(self.offset, self.data.len());
        let start = self.offset;
        self.offset = end;
        start..end
    }

    /// Text in the given range.
    #[inline]
    pub fn slice(&self, range: Range<usize>) -> &str {
        &self.data[range]
    }

    /// Check whether the text at `at` starts with `prefix`.
    #[inline]
    pub fn starts_with_at(&self, at: usize, prefix: &str) -> bool {
        self.data.as_bytes()[at..].starts_with(prefix.as_bytes())
    }

    /// Find the next occurrence of an ASCII byte at or after `from`.
    #[inline]
    pub fn find_byte(&self, needle: u8, from: usize) -> Option<usize> {
        memchr(needle, &self.data.as_bytes()[from..]).map(|i| from + i)
    }

    /// Find the next occurrence of `needle` at or after `from`.
    #[inline]
    pub fn find_str(&self, needle: &str, from: usize) -> Option<usize> {
        memmem::find(&self.data.as_bytes()[from..], needle.as_bytes()).map(|i| from + i)
    }

    /// Drop the consumed prefix and reset the cursor to zero.
    ///
    /// Keeps allocated capacity.
    pub fn compact(&mut self) {
        if self.offset == 0 {
            return;
        }
        self.data.drain(..self.offset);
        self.offset = 0;
    }

    /// Discard all text, consumed or not. Keeps allocated capacity.
    pub fn clear(&mut self) {
        self.data.clear();
        self.offset = 0;
    }
}
