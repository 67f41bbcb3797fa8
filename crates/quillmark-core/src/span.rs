//! Source locations reported with lines and diagnostics.
//!
//! Blocks carry no location (a document has no identity beyond block
//! position), but lines and diagnostics do so tools can point back into the
//! authored text.

/// A `[start, end)` byte range in the source text.
///
/// Offsets are `u32`. Positions past 4 GiB saturate at `u32::MAX`; the
/// assembler slices the input with [`crate::lexer::Line::offset`], so
/// saturation only affects what diagnostics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build a span from `usize` offsets, saturating each at `u32::MAX`.
    ///
    /// ```rust
    /// use quillmark_core::span::Span;
    ///
    /// assert_eq!(Span::from_offsets(3, 9), Span::new(3, 9));
    /// ```
    #[inline]
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Self {
            start: u32::try_from(start).unwrap_or(u32::MAX),
            end: u32::try_from(end).unwrap_or(u32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_offsets_past_u32_saturate() {
        let far = u32::MAX as usize + 10;
        assert_eq!(Span::from_offsets(5, far), Span::new(5, u32::MAX));
        assert_eq!(Span::from_offsets(far, far), Span::new(u32::MAX, u32::MAX));
    }
}
