//! Document model produced by the parser and consumed by every surface.
//!
//! The model is deliberately flat: a document is an ordered list of blocks,
//! and block text is a sequence of styled runs rather than a markup string.
//! Renderers realize the same runs on any surface without re-parsing.
//!
//! Strings borrow from the input (`Cow<'a, str>`) wherever the source text can
//! be reused as-is.

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;

/// How an unclosed code-fence delimiter line is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceMode {
    /// An unclosed delimiter emits an empty [`CodeFence`]; the lines after it
    /// are classified as ordinary content.
    #[default]
    Legacy,
    /// An unclosed delimiter opens a fence that collects raw lines until the
    /// next delimiter line or end of input.
    Multiline,
}

/// A rendered document: blocks in source order.
///
/// Constructed fresh on every render and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document<'a> {
    /// Content blocks in document order.
    pub blocks: Vec<Block<'a>>,
}

impl<'a> Document<'a> {
    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of top-level blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over the blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, Block<'a>> {
        self.blocks.iter()
    }

    /// Convert every borrowed string into an owned one.
    pub fn into_owned(self) -> Document<'static> {
        Document {
            blocks: self.blocks.into_iter().map(Block::into_owned).collect(),
        }
    }
}

/// Block-level nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// Section heading (levels 1-3).
    Heading(Heading<'a>),
    /// A single line of body text.
    Paragraph(Paragraph<'a>),
    /// Run of contiguous same-kind list items.
    List(List<'a>),
    /// A single quoted line.
    Blockquote(Blockquote<'a>),
    /// Embedded image.
    Image(Image<'a>),
    /// Embedded video.
    Video(Video<'a>),
    /// Code fence with opaque content.
    CodeFence(CodeFence<'a>),
    /// Separator produced by blank lines between content.
    Break,
}

impl<'a> Block<'a> {
    /// The kind tag of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading(_) => BlockKind::Heading,
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::List(_) => BlockKind::List,
            Block::Blockquote(_) => BlockKind::Blockquote,
            Block::Image(_) => BlockKind::Image,
            Block::Video(_) => BlockKind::Video,
            Block::CodeFence(_) => BlockKind::CodeFence,
            Block::Break => BlockKind::Break,
        }
    }

    fn into_owned(self) -> Block<'static> {
        match self {
            Block::Heading(h) => Block::Heading(Heading {
                level: h.level,
                content: owned_runs(h.content),
            }),
            Block::Paragraph(p) => Block::Paragraph(Paragraph {
                content: owned_runs(p.content),
            }),
            Block::List(l) => Block::List(List {
                kind: l.kind,
                items: l
                    .items
                    .into_iter()
                    .map(|item| ListItem {
                        number: item.number,
                        content: owned_runs(item.content),
                    })
                    .collect(),
            }),
            Block::Blockquote(q) => Block::Blockquote(Blockquote {
                content: owned_runs(q.content),
            }),
            Block::Image(i) => Block::Image(Image {
                alt: owned(i.alt),
                url: owned(i.url),
            }),
            Block::Video(v) => Block::Video(Video { url: owned(v.url) }),
            Block::CodeFence(c) => Block::CodeFence(CodeFence { raw: owned(c.raw) }),
            Block::Break => Block::Break,
        }
    }
}

/// Tag identifying a block variant without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Paragraph,
    List,
    Blockquote,
    Image,
    Video,
    CodeFence,
    Break,
}

impl BlockKind {
    /// Whether text of this kind goes through the inline formatter.
    ///
    /// Headings keep their text verbatim: `# **Title**` renders the asterisks
    /// literally. Media, fences and breaks carry no inline text at all.
    pub const fn formats_inline(self) -> bool {
        matches!(
            self,
            BlockKind::Paragraph | BlockKind::List | BlockKind::Blockquote
        )
    }

    /// Lower-case name used in tool output.
    pub const fn name(self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::List => "list",
            BlockKind::Blockquote => "blockquote",
            BlockKind::Image => "image",
            BlockKind::Video => "video",
            BlockKind::CodeFence => "code_fence",
            BlockKind::Break => "break",
        }
    }
}

/// Heading level. Only three levels exist; `####` is body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
}

impl HeadingLevel {
    /// Numeric level (1-3).
    pub const fn get(self) -> u8 {
        self as u8
    }
}

/// Section heading. `content` is a single verbatim [`InlineRun::Plain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: HeadingLevel,
    pub content: Vec<InlineRun<'a>>,
}

/// Paragraph line with inline formatting applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    pub content: Vec<InlineRun<'a>>,
}

/// List ordering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Numbered list (`1. item`).
    Ordered,
    /// Bulleted list (`- item`).
    Unordered,
}

/// A list block. All items share one [`ListKind`], fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<'a> {
    pub kind: ListKind,
    pub items: Vec<ListItem<'a>>,
}

impl<'a> List<'a> {
    /// Whether this is a numbered list.
    pub fn is_ordered(&self) -> bool {
        self.kind == ListKind::Ordered
    }
}

/// A single list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Visible number for ordered items, `None` for bullets.
    ///
    /// Derived from the preceding raw line only: one more than that line's
    /// source number when it was itself an ordered item, otherwise 1.
    pub number: Option<u64>,
    /// Inline content with formatting.
    pub content: Vec<InlineRun<'a>>,
}

/// A quoted line with inline formatting applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blockquote<'a> {
    pub content: Vec<InlineRun<'a>>,
}

/// Image embed from `![alt](url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image<'a> {
    pub alt: CowStr<'a>,
    pub url: CowStr<'a>,
}

/// Video embed from `![video](url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video<'a> {
    pub url: CowStr<'a>,
}

/// Code fence. Content is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFence<'a> {
    /// Raw text between the delimiters (empty for an unclosed legacy fence).
    pub raw: CowStr<'a>,
}

/// A styled span of text within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineRun<'a> {
    /// Unstyled text, including any unmatched markers.
    Plain(CowStr<'a>),
    /// `**text**`
    Bold(CowStr<'a>),
    /// `*text*`
    Italic(CowStr<'a>),
    /// `***text***`
    BoldItalic(CowStr<'a>),
    /// `` `text` ``
    Code(CowStr<'a>),
    /// `[text](url)`
    Link { text: CowStr<'a>, url: CowStr<'a> },
}

impl<'a> InlineRun<'a> {
    /// The visible text of this run.
    pub fn text(&self) -> &str {
        match self {
            InlineRun::Plain(t)
            | InlineRun::Bold(t)
            | InlineRun::Italic(t)
            | InlineRun::BoldItalic(t)
            | InlineRun::Code(t) => t,
            InlineRun::Link { text, .. } => text,
        }
    }

    fn into_owned(self) -> InlineRun<'static> {
        match self {
            InlineRun::Plain(t) => InlineRun::Plain(owned(t)),
            InlineRun::Bold(t) => InlineRun::Bold(owned(t)),
            InlineRun::Italic(t) => InlineRun::Italic(owned(t)),
            InlineRun::BoldItalic(t) => InlineRun::BoldItalic(owned(t)),
            InlineRun::Code(t) => InlineRun::Code(owned(t)),
            InlineRun::Link { text, url } => InlineRun::Link {
                text: owned(text),
                url: owned(url),
            },
        }
    }
}

fn owned(s: CowStr<'_>) -> CowStr<'static> {
    CowStr::Owned(s.into_owned())
}

fn owned_runs(runs: Vec<InlineRun<'_>>) -> Vec<InlineRun<'static>> {
    runs.into_iter().map(InlineRun::into_owned).collect()
}
