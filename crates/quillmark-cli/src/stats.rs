use std::fmt;

use quillmark_core::{Block, Document};

/// Block and size counts for one post.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub total_blocks: usize,
    pub headings: usize,
    pub paragraphs: usize,
    pub lists: usize,
    pub list_items: usize,
    pub blockquotes: usize,
    pub images: usize,
    pub videos: usize,
    pub code_fences: usize,
    pub breaks: usize,
    pub chars: usize,
    pub words: usize,
    pub lines: usize,
}

impl DocumentStats {
    pub fn from_document(doc: &Document<'_>, input: &str) -> Self {
        let mut stats = Self {
            total_blocks: doc.len(),
            chars: input.chars().count(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
            ..Self::default()
        };

        for block in doc.iter() {
            match block {
                Block::Heading(_) => stats.headings += 1,
                Block::Paragraph(_) => stats.paragraphs += 1,
                Block::List(l) => {
                    stats.lists += 1;
                    stats.list_items += l.items.len();
                }
                Block::Blockquote(_) => stats.blockquotes += 1,
                Block::Image(_) => stats.images += 1,
                Block::Video(_) => stats.videos += 1,
                Block::CodeFence(_) => stats.code_fences += 1,
                Block::Break => stats.breaks += 1,
            }
        }

        stats
    }
}

impl fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Document Statistics")?;
        writeln!(f, "-------------------")?;
        writeln!(f, "Content:")?;
        writeln!(f, "  Total blocks:   {}", self.total_blocks)?;
        writeln!(f, "  Headings:       {}", self.headings)?;
        writeln!(f, "  Paragraphs:     {}", self.paragraphs)?;
        writeln!(f, "  Lists:          {} ({} items)", self.lists, self.list_items)?;
        writeln!(f, "  Blockquotes:    {}", self.blockquotes)?;
        writeln!(f, "  Images:         {}", self.images)?;
        writeln!(f, "  Videos:         {}", self.videos)?;
        writeln!(f, "  Code fences:    {}", self.code_fences)?;
        writeln!(f, "  Breaks:         {}", self.breaks)?;
        writeln!(f)?;
        writeln!(f, "Size:")?;
        writeln!(f, "  Characters:     {}", self.chars)?;
        writeln!(f, "  Words (est.):   {}", self.words)?;
        writeln!(f, "  Lines:          {}", self.lines)
    }
}
