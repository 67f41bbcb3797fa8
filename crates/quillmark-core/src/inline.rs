//! Inline formatter.
//!
//! Formatting is a fixed table of passes. Each pass scans only the text that
//! earlier passes left plain, turns every match into one styled run, and leaves
//! the gaps plain for the passes after it. Because `***` is consumed before
//! `**`, and `**` before `*`, a bold-italic span never degrades into a bold run
//! wrapping a stray asterisk.
//!
//! Unmatched markers are not an error; they stay in the plain text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::ast::InlineRun;

type Build = for<'a> fn(&Captures<'a>) -> InlineRun<'a>;

struct Pass {
    pattern: LazyLock<Regex>,
    build: Build,
}

static PASSES: [Pass; 5] = [
    Pass {
        pattern: LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern")),
        build: link,
    },
    Pass {
        pattern: LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").expect("bold-italic pattern")),
        build: bold_italic,
    },
    Pass {
        pattern: LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern")),
        build: bold,
    },
    Pass {
        pattern: LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern")),
        build: italic,
    },
    Pass {
        pattern: LazyLock::new(|| Regex::new(r"`(.+?)`").expect("code pattern")),
        build: code,
    },
];

/// Text still waiting for later passes, or a finished run.
enum Piece<'a> {
    Raw(&'a str),
    Done(InlineRun<'a>),
}

/// Format a line of text into styled runs.
///
/// Returns an empty vector for empty text. Text without markup comes back as a
/// single [`InlineRun::Plain`] equal to the input.
pub fn format_inline(text: &str) -> Vec<InlineRun<'_>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut pieces = vec![Piece::Raw(text)];
    for pass in &PASSES {
        pieces = apply(pass, pieces);
    }

    pieces
        .into_iter()
        .map(|piece| match piece {
            Piece::Raw(raw) => InlineRun::Plain(Cow::Borrowed(raw)),
            Piece::Done(run) => run,
        })
        .collect()
}

/// Wrap text as a single unformatted run (used for headings).
pub fn verbatim(text: &str) -> Vec<InlineRun<'_>> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![InlineRun::Plain(Cow::Borrowed(text))]
    }
}

/// Whether plain text still contains emphasis or code markers that did not
/// pair up.
pub fn has_stray_marker(plain: &str) -> bool {
    if plain.contains('`') {
        return true;
    }
    let mut chars = plain.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '*' && chars.peek().is_some_and(|next| !next.is_whitespace()) {
            return true;
        }
    }
    false
}

fn apply<'a>(pass: &Pass, pieces: Vec<Piece<'a>>) -> Vec<Piece<'a>> {
    let mut out = Vec::with_capacity(pieces.len());
    for piece in pieces {
        match piece {
            Piece::Raw(raw) => split(pass, raw, &mut out),
            done => out.push(done),
        }
    }
    out
}

fn split<'a>(pass: &Pass, raw: &'a str, out: &mut Vec<Piece<'a>>) {
    let mut last = 0;
    for caps in pass.pattern.captures_iter(raw) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            out.push(Piece::Raw(&raw[last..whole.start()]));
        }
        out.push(Piece::Done((pass.build)(&caps)));
        last = whole.end();
    }
    if last < raw.len() {
        out.push(Piece::Raw(&raw[last..]));
    }
}

fn group<'a>(caps: &Captures<'a>, index: usize) -> Cow<'a, str> {
    Cow::Borrowed(caps.get(index).map_or("", |m| m.as_str()))
}

fn link<'a>(caps: &Captures<'a>) -> InlineRun<'a> {
    InlineRun::Link {
        text: group(caps, 1),
        url: group(caps, 2),
    }
}

fn bold_italic<'a>(caps: &Captures<'a>) -> InlineRun<'a> {
    InlineRun::BoldItalic(group(caps, 1))
}

fn bold<'a>(caps: &Captures<'a>) -> InlineRun<'a> {
    InlineRun::Bold(group(caps, 1))
}

fn italic<'a>(caps: &Captures<'a>) -> InlineRun<'a> {
    InlineRun::Italic(group(caps, 1))
}

fn code<'a>(caps: &Captures<'a>) -> InlineRun<'a> {
    InlineRun::Code(group(caps, 1))
}
