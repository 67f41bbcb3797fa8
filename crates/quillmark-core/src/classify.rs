//! Line classification.
//!
//! Each raw line is tagged on its own text alone. The checks run in a fixed
//! priority order and the first match wins; several patterns share prefixes
//! (`![video](` is also a valid image, `#### x` starts like a heading), so the
//! order is part of the syntax.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::HeadingLevel;

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s").expect("ordered item pattern"));

const FENCE: &str = "```";

/// Classification of a single line with its extracted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `![video](url)`
    Video { url: &'a str },
    /// `![alt](url)`
    Image { alt: &'a str, url: &'a str },
    /// `# `, `## ` or `### ` followed by text.
    Heading { level: HeadingLevel, text: &'a str },
    /// `> text`
    Blockquote { text: &'a str },
    /// `- text`
    UnorderedItem { text: &'a str },
    /// `N. text`, with `N` as written in the source.
    OrderedItem { number: u64, text: &'a str },
    /// A line whose trimmed text starts with three backticks.
    ///
    /// `inline` holds the inner text when the fence also closes on the same
    /// line (```` ```x``` ````).
    Fence { inline: Option<&'a str> },
    /// Whitespace-only line.
    Blank,
    /// Anything else, verbatim.
    Paragraph { text: &'a str },
}

/// Classify one line (without its newline).
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(url) = video(line) {
        return LineKind::Video { url };
    }
    if let Some((alt, url)) = image(line) {
        return LineKind::Image { alt, url };
    }
    if let Some((level, text)) = heading(line) {
        return LineKind::Heading { level, text };
    }
    if let Some(text) = line.strip_prefix("> ") {
        return LineKind::Blockquote { text };
    }
    if let Some(text) = line.strip_prefix("- ") {
        return LineKind::UnorderedItem { text };
    }
    if let Some((number, text)) = ordered_item(line) {
        return LineKind::OrderedItem { number, text };
    }
    if let Some(inline) = fence(line) {
        return LineKind::Fence { inline };
    }
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    LineKind::Paragraph { text: line }
}

/// Whether a line is a code-fence delimiter.
pub fn is_fence_delimiter(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

fn video(line: &str) -> Option<&str> {
    line.strip_prefix("![video](")?.strip_suffix(')')
}

fn image(line: &str) -> Option<(&str, &str)> {
    line.strip_prefix("![")?.strip_suffix(')')?.split_once("](")
}

fn heading(line: &str) -> Option<(HeadingLevel, &str)> {
    if let Some(text) = line.strip_prefix("### ") {
        Some((HeadingLevel::H3, text))
    } else if let Some(text) = line.strip_prefix("## ") {
        Some((HeadingLevel::H2, text))
    } else {
        line.strip_prefix("# ").map(|text| (HeadingLevel::H1, text))
    }
}

fn ordered_item(line: &str) -> Option<(u64, &str)> {
    let caps = ORDERED_ITEM.captures(line)?;
    let whole = caps.get(0)?;
    let digits = caps.get(1)?.as_str();
    // An absurdly long number saturates rather than failing the line.
    let number = digits.parse::<u64>().unwrap_or(u64::MAX);
    Some((number, &line[whole.end()..]))
}

fn fence(line: &str) -> Option<Option<&str>> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix(FENCE)?;
    let inline = if rest.len() >= FENCE.len() {
        rest.strip_suffix(FENCE)
    } else {
        None
    };
    Some(inline)
}
