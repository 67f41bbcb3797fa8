//! Block assembler.
//!
//! Walks the input line by line, classifies each line, and builds the
//! document. The only state carried between lines is:
//!
//! - the open list, if any (contiguous same-kind items join one list),
//! - the source number of the previous line when it was an ordered item,
//! - an open multi-line fence (only in [`FenceMode::Multiline`]).
//!
//! None of it outlives a call, so parsing the same text twice gives the same
//! document.

use std::borrow::Cow;
use std::ops::Range;

use tracing::{debug, trace};

use crate::ast::{
    Block, BlockKind, Blockquote, CodeFence, Document, FenceMode, Heading, Image, InlineRun, List,
    ListItem, ListKind, Paragraph, Video,
};
use crate::classify::{classify, is_fence_delimiter, LineKind};
use crate::error::{Diagnostic, Diagnostics};
use crate::inline::{format_inline, has_stray_marker, verbatim};
use crate::lexer::{Lexer, Line};
use crate::span::Span;

/// A document together with the diagnostics found while building it.
#[derive(Debug)]
pub struct ParseResult<'a> {
    /// The parsed document, identical to what [`Parser::parse`] returns.
    pub document: Document<'a>,
    /// Lines that rendered in a degraded way.
    pub diagnostics: Diagnostics,
}

impl<'a> ParseResult<'a> {
    /// Check if nothing degraded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parser with configurable code-fence handling.
///
/// ```rust
/// use quillmark_core::{Block, FenceMode, Parser};
///
/// let parser = Parser::new().with_fence_mode(FenceMode::Multiline);
/// let doc = parser.parse("```\nlet x = 1;\n```");
/// assert!(matches!(&doc.blocks[0], Block::CodeFence(f) if f.raw == "let x = 1;"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    fence: FenceMode,
}

impl Parser {
    /// Create a parser with default options ([`FenceMode::Legacy`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how unclosed code-fence delimiters are handled.
    pub fn with_fence_mode(mut self, fence: FenceMode) -> Self {
        self.fence = fence;
        self
    }

    /// The configured fence mode.
    pub fn fence_mode(&self) -> FenceMode {
        self.fence
    }

    /// Parse text into a document. Never fails.
    pub fn parse<'a>(&self, input: &'a str) -> Document<'a> {
        Assembler::new(input, self.fence, None).run()
    }

    /// Parse text and collect diagnostics about degraded lines.
    pub fn parse_with_diagnostics<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let mut diagnostics = Diagnostics::new();
        let document = Assembler::new(input, self.fence, Some(&mut diagnostics)).run();
        ParseResult {
            document,
            diagnostics,
        }
    }
}

struct OpenFence {
    line: u32,
    span: Span,
    /// Byte range from the first to the last content line.
    content: Option<Range<usize>>,
}

struct Assembler<'a, 'd> {
    input: &'a str,
    fence_mode: FenceMode,
    blocks: Vec<Block<'a>>,
    list: Option<List<'a>>,
    previous_number: Option<u64>,
    fence: Option<OpenFence>,
    diagnostics: Option<&'d mut Diagnostics>,
}

impl<'a, 'd> Assembler<'a, 'd> {
    fn new(input: &'a str, fence_mode: FenceMode, diagnostics: Option<&'d mut Diagnostics>) -> Self {
        Self {
            input,
            fence_mode,
            blocks: Vec::with_capacity(16),
            list: None,
            previous_number: None,
            fence: None,
            diagnostics,
        }
    }

    fn run(mut self) -> Document<'a> {
        let mut lexer = Lexer::new(self.input);

        while let Some(line) = lexer.next_line() {
            if self.fence.is_some() {
                self.fence_line(line);
                self.previous_number = None;
                continue;
            }

            let kind = classify(line.text);
            trace!(line = line.number, ?kind, "classified line");
            self.line(line, kind);
            self.previous_number = match kind {
                LineKind::OrderedItem { number, .. } => Some(number),
                _ => None,
            };
        }

        if let Some(open) = self.fence.take() {
            self.note(|| Diagnostic::unterminated_fence(open.line, open.span));
            self.close_fence(open);
        }
        self.flush_list();

        Document {
            blocks: self.blocks,
        }
    }

    fn line(&mut self, line: Line<'a>, kind: LineKind<'a>) {
        match kind {
            LineKind::UnorderedItem { text } => self.item(ListKind::Unordered, None, text, line),
            LineKind::OrderedItem { number, text } => {
                let shown = self.previous_number.map_or(1, |prev| prev.saturating_add(1));
                if shown != number {
                    self.note(|| Diagnostic::renumbered(number, shown, line.number, line.span));
                }
                self.item(ListKind::Ordered, Some(shown), text, line);
            }
            LineKind::Blank => {
                self.flush_list();
                if !self.blocks.is_empty() {
                    self.blocks.push(Block::Break);
                }
            }
            LineKind::Heading { level, text } => {
                let content = self.runs(BlockKind::Heading, text, line);
                self.emit(Block::Heading(Heading { level, content }));
            }
            LineKind::Paragraph { text } => {
                let hashes = text.bytes().take_while(|&b| b == b'#').count();
                if hashes > 3 && text[hashes..].starts_with(' ') {
                    self.note(|| Diagnostic::deep_heading(hashes, line.number, line.span));
                }
                let content = self.runs(BlockKind::Paragraph, text, line);
                self.emit(Block::Paragraph(Paragraph { content }));
            }
            LineKind::Blockquote { text } => {
                let content = self.runs(BlockKind::Blockquote, text, line);
                self.emit(Block::Blockquote(Blockquote { content }));
            }
            LineKind::Image { alt, url } => self.emit(Block::Image(Image {
                alt: Cow::Borrowed(alt),
                url: Cow::Borrowed(url),
            })),
            LineKind::Video { url } => self.emit(Block::Video(Video {
                url: Cow::Borrowed(url),
            })),
            LineKind::Fence { inline: Some(raw) } => self.emit(Block::CodeFence(CodeFence {
                raw: Cow::Borrowed(raw),
            })),
            LineKind::Fence { inline: None } => self.open_fence(line),
        }
    }

    fn item(&mut self, kind: ListKind, number: Option<u64>, text: &'a str, line: Line<'a>) {
        let content = self.runs(BlockKind::List, text, line);
        let item = ListItem { number, content };

        if let Some(list) = self.list.as_mut().filter(|list| list.kind == kind) {
            list.items.push(item);
            return;
        }

        self.flush_list();
        self.list = Some(List {
            kind,
            items: vec![item],
        });
    }

    fn runs(&mut self, kind: BlockKind, text: &'a str, line: Line<'a>) -> Vec<InlineRun<'a>> {
        if !kind.formats_inline() {
            return verbatim(text);
        }

        let runs = format_inline(text);
        let stray = runs
            .iter()
            .any(|run| matches!(run, InlineRun::Plain(plain) if has_stray_marker(plain)));
        if stray {
            self.note(|| Diagnostic::stray_marker(line.number, line.span));
        }
        runs
    }

    fn open_fence(&mut self, line: Line<'a>) {
        match self.fence_mode {
            FenceMode::Legacy => {
                debug!(line = line.number, "unclosed fence delimiter, emitting empty fence");
                self.note(|| Diagnostic::unterminated_fence(line.number, line.span));
                self.emit(Block::CodeFence(CodeFence {
                    raw: Cow::Borrowed(""),
                }));
            }
            FenceMode::Multiline => {
                debug!(line = line.number, "opened code fence");
                // The fence is a block boundary even before it closes.
                self.flush_list();
                self.fence = Some(OpenFence {
                    line: line.number,
                    span: line.span,
                    content: None,
                });
            }
        }
    }

    fn fence_line(&mut self, line: Line<'a>) {
        if is_fence_delimiter(line.text) {
            if let Some(open) = self.fence.take() {
                debug!(opened = open.line, closed = line.number, "closed code fence");
                self.close_fence(open);
            }
            return;
        }

        if let Some(open) = self.fence.as_mut() {
            let end = line.offset + line.text.len();
            let start = open.content.as_ref().map_or(line.offset, |range| range.start);
            open.content = Some(start..end);
        }
    }

    fn close_fence(&mut self, open: OpenFence) {
        let raw = match open.content {
            None => Cow::Borrowed(""),
            Some(range) => {
                let text = &self.input[range];
                if text.contains('\r') {
                    Cow::Owned(text.replace("\r\n", "\n"))
                } else {
                    Cow::Borrowed(text)
                }
            }
        };
        self.emit(Block::CodeFence(CodeFence { raw }));
    }

    /// Emit a non-list block, closing any open list first.
    fn emit(&mut self, block: Block<'a>) {
        self.flush_list();
        self.blocks.push(block);
    }

    fn flush_list(&mut self) {
        if let Some(list) = self.list.take() {
            debug!(kind = ?list.kind, items = list.items.len(), "flushed list");
            self.blocks.push(Block::List(list));
        }
    }

    fn note(&mut self, make: impl FnOnce() -> Diagnostic) {
        if let Some(diagnostics) = self.diagnostics.as_deref_mut() {
            diagnostics.push(make());
        }
    }
}
