use std::fmt::Write;

use super::Renderer;
use crate::ast::{Block, Document, InlineRun};

/// Plain-text surface for terminals and logs.
///
/// Styling is dropped; links keep their URL in angle brackets and media are
/// shown as bracketed placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, doc: &Document<'_>) -> String {
        let mut out = String::new();
        for block in doc.iter() {
            match block {
                Block::Heading(h) => {
                    let title = runs_to_text(&h.content);
                    let rule = if h.level.get() == 1 { '=' } else { '-' };
                    out.push_str(&title);
                    out.push('\n');
                    out.extend(std::iter::repeat(rule).take(title.chars().count()));
                }
                Block::Paragraph(p) => out.push_str(&runs_to_text(&p.content)),
                Block::List(l) => {
                    for (i, item) in l.items.iter().enumerate() {
                        if i > 0 {
                            out.push('\n');
                        }
                        match item.number {
                            Some(n) => {
                                let _ = write!(out, "{n}. ");
                            }
                            None => out.push_str("* "),
                        }
                        out.push_str(&runs_to_text(&item.content));
                    }
                }
                Block::Blockquote(q) => {
                    out.push_str("| ");
                    out.push_str(&runs_to_text(&q.content));
                }
                Block::Image(i) => {
                    let _ = write!(out, "[image: {}] <{}>", i.alt, i.url);
                }
                Block::Video(v) => {
                    let _ = write!(out, "[video] <{}>", v.url);
                }
                Block::CodeFence(c) => {
                    for (i, line) in c.raw.lines().enumerate() {
                        if i > 0 {
                            out.push('\n');
                        }
                        out.push_str("    ");
                        out.push_str(line);
                    }
                }
                Block::Break => {}
            }
            out.push('\n');
        }
        out
    }
}

/// Flatten runs to their visible text.
fn runs_to_text(runs: &[InlineRun<'_>]) -> String {
    let mut text = String::new();
    for run in runs {
        match run {
            InlineRun::Link { text: label, url } => {
                text.push_str(label);
                text.push_str(" <");
                text.push_str(url);
                text.push('>');
            }
            other => text.push_str(other.text()),
        }
    }
    text
}
