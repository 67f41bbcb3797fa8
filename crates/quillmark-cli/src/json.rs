//! JSON mirror of the document model for `--json` output.
//!
//! The core crate stays free of serde; these types borrow from the parsed
//! document and exist only for serialization.

use quillmark_core::{Block, Diagnostics, Document, InlineRun};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonDocument<'a> {
    blocks: Vec<JsonBlock<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonBlock<'a> {
    Heading {
        level: u8,
        content: Vec<JsonInline<'a>>,
    },
    Paragraph {
        content: Vec<JsonInline<'a>>,
    },
    List {
        ordered: bool,
        items: Vec<JsonListItem<'a>>,
    },
    Blockquote {
        content: Vec<JsonInline<'a>>,
    },
    Image {
        alt: &'a str,
        url: &'a str,
    },
    Video {
        url: &'a str,
    },
    CodeFence {
        raw: &'a str,
    },
    Break,
}

#[derive(Serialize)]
struct JsonListItem<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<u64>,
    content: Vec<JsonInline<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonInline<'a> {
    Plain { text: &'a str },
    Bold { text: &'a str },
    Italic { text: &'a str },
    BoldItalic { text: &'a str },
    Code { text: &'a str },
    Link { text: &'a str, url: &'a str },
}

#[derive(Serialize)]
pub struct JsonDiagnostics<'a> {
    clean: bool,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'static str,
    line: u32,
    message: &'a str,
    start: u32,
    end: u32,
}

pub fn convert_document<'a>(doc: &'a Document<'_>) -> JsonDocument<'a> {
    JsonDocument {
        blocks: doc.iter().map(convert_block).collect(),
    }
}

pub fn convert_diagnostics(diagnostics: &Diagnostics) -> JsonDiagnostics<'_> {
    JsonDiagnostics {
        clean: diagnostics.is_empty(),
        diagnostics: diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                code: d.kind.code(),
                line: d.line,
                message: &d.message,
                start: d.span.start,
                end: d.span.end,
            })
            .collect(),
    }
}

fn convert_block<'a>(block: &'a Block<'_>) -> JsonBlock<'a> {
    match block {
        Block::Heading(h) => JsonBlock::Heading {
            level: h.level.get(),
            content: convert_runs(&h.content),
        },
        Block::Paragraph(p) => JsonBlock::Paragraph {
            content: convert_runs(&p.content),
        },
        Block::List(l) => JsonBlock::List {
            ordered: l.is_ordered(),
            items: l
                .items
                .iter()
                .map(|item| JsonListItem {
                    number: item.number,
                    content: convert_runs(&item.content),
                })
                .collect(),
        },
        Block::Blockquote(q) => JsonBlock::Blockquote {
            content: convert_runs(&q.content),
        },
        Block::Image(i) => JsonBlock::Image {
            alt: &i.alt,
            url: &i.url,
        },
        Block::Video(v) => JsonBlock::Video { url: &v.url },
        Block::CodeFence(c) => JsonBlock::CodeFence { raw: &c.raw },
        Block::Break => JsonBlock::Break,
    }
}

fn convert_runs<'a>(runs: &'a [InlineRun<'_>]) -> Vec<JsonInline<'a>> {
    runs.iter().map(convert_inline).collect()
}

fn convert_inline<'a>(run: &'a InlineRun<'_>) -> JsonInline<'a> {
    match run {
        InlineRun::Plain(text) => JsonInline::Plain { text },
        InlineRun::Bold(text) => JsonInline::Bold { text },
        InlineRun::Italic(text) => JsonInline::Italic { text },
        InlineRun::BoldItalic(text) => JsonInline::BoldItalic { text },
        InlineRun::Code(text) => JsonInline::Code { text },
        InlineRun::Link { text, url } => JsonInline::Link { text, url },
    }
}
