//! Line splitter feeding the classifier.
//!
//! Input is split on `\n` using `memchr`. A `\r` directly before the newline
//! is dropped from the line text so CRLF content (pasted from a Windows
//! textarea) classifies the same as LF content.

use crate::span::Span;
use memchr::memchr;

/// A single raw line with its position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without trailing newline or carriage return).
    pub text: &'a str,
    /// One-based line number.
    pub number: u32,
    /// Byte offset of `text` in the original input.
    pub offset: usize,
    /// Byte span of `text`, for diagnostics.
    pub span: Span,
}

/// Iterates over the lines of an input, borrowing from it.
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    number: u32,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            number: 0,
        }
    }

    /// Check if all input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Consume and return the next line, or `None` at end of input.
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }

        let bytes = self.input.as_bytes();
        let start = self.offset;
        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => bytes.len(),
        };

        let text_end = if end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < bytes.len() { end + 1 } else { end };
        self.number += 1;

        // `\n` and `\r` are ASCII, so both slice points sit on char boundaries.
        Some(Line {
            text: &self.input[start..text_end],
            number: self.number,
            offset: start,
            span: Span::from_offsets(start, text_end),
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
