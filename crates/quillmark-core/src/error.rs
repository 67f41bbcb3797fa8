//! Diagnostics for content that rendered in a degraded way.
//!
//! Rendering itself never fails: malformed markup falls back to plain text.
//! Authoring tools can still ask the parser which lines degraded, so an editor
//! can hint at a typo before the article is published.

use crate::span::Span;

/// Categories of degraded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Four or more `#` before a space; rendered as a paragraph.
    DeepHeading,
    /// A code fence opened but never closed.
    UnterminatedFence,
    /// `*` or `` ` `` left over in plain text after formatting.
    StrayMarker,
    /// An ordered item displays a different number than the one written.
    Renumbered,
}

impl DiagnosticKind {
    /// Stable identifier used in tool output.
    pub const fn code(self) -> &'static str {
        match self {
            DiagnosticKind::DeepHeading => "deep-heading",
            DiagnosticKind::UnterminatedFence => "unterminated-fence",
            DiagnosticKind::StrayMarker => "stray-marker",
            DiagnosticKind::Renumbered => "renumbered",
        }
    }
}

/// A note about one line of input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct Diagnostic {
    /// Diagnostic category.
    pub kind: DiagnosticKind,
    /// Human-readable description.
    pub message: String,
    /// One-based line number.
    pub line: u32,
    /// Byte span of the offending line.
    pub span: Span,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, line: u32, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            span,
        }
    }

    /// A `####`-style line that renders as a paragraph.
    pub fn deep_heading(hashes: usize, line: u32, span: Span) -> Self {
        Self::new(
            DiagnosticKind::DeepHeading,
            format!("{hashes} '#' characters is not a heading (levels 1-3 only)"),
            line,
            span,
        )
    }

    /// A fence without a closing delimiter.
    pub fn unterminated_fence(line: u32, span: Span) -> Self {
        Self::new(
            DiagnosticKind::UnterminatedFence,
            "code fence is never closed",
            line,
            span,
        )
    }

    /// Leftover emphasis or code markers.
    pub fn stray_marker(line: u32, span: Span) -> Self {
        Self::new(
            DiagnosticKind::StrayMarker,
            "unmatched '*' or '`' rendered as plain text",
            line,
            span,
        )
    }

    /// An ordered item whose visible number differs from the source.
    pub fn renumbered(written: u64, shown: u64, line: u32, span: Span) -> Self {
        Self::new(
            DiagnosticKind::Renumbered,
            format!("item written as {written} is displayed as {shown}"),
            line,
            span,
        )
    }
}

/// Diagnostics collected while parsing, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Check if any diagnostics were collected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over the diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Count diagnostics of one kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
