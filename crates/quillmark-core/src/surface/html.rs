//! HTML surfaces: the authoring preview panel and the public article page.
//!
//! Both share one writer and differ only in their [`Flavor`]: the wrapper
//! element and the attributes put on media and links.

use std::borrow::Cow;
use std::fmt::Write;

use super::{HtmlOptions, Renderer, TrustMode};
use crate::ast::{Block, Document, InlineRun, List};

struct Flavor {
    wrapper: Option<(&'static str, &'static str)>,
    image_open: &'static str,
    image_attrs: &'static str,
    image_close: &'static str,
    video_attrs: &'static str,
    link_attrs: &'static str,
}

const PREVIEW: Flavor = Flavor {
    wrapper: None,
    image_open: "",
    image_attrs: " class=\"preview-image\"",
    image_close: "",
    video_attrs: " controls class=\"preview-video\"",
    link_attrs: "",
};

const ARTICLE: Flavor = Flavor {
    wrapper: Some(("<article class=\"blog-content\">\n", "</article>\n")),
    image_open: "<figure>",
    image_attrs: " loading=\"lazy\"",
    image_close: "</figure>",
    video_attrs: " controls preload=\"metadata\"",
    link_attrs: " target=\"_blank\" rel=\"noopener noreferrer\"",
};

/// Live preview shown next to the editor while an article is written.
///
/// Emits a bare fragment so the editor can drop it into its preview pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewRenderer {
    options: HtmlOptions,
}

impl PreviewRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Renderer for PreviewRenderer {
    fn render(&self, doc: &Document<'_>) -> String {
        HtmlWriter::new(&PREVIEW, self.options.trust()).finish(doc)
    }
}

/// Public article page.
///
/// Wraps the content in an `<article>` element, lazy-loads images and opens
/// links in a new tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleRenderer {
    options: HtmlOptions,
}

impl ArticleRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Renderer for ArticleRenderer {
    fn render(&self, doc: &Document<'_>) -> String {
        HtmlWriter::new(&ARTICLE, self.options.trust()).finish(doc)
    }
}

struct HtmlWriter<'f> {
    out: String,
    flavor: &'f Flavor,
    trust: TrustMode,
}

impl<'f> HtmlWriter<'f> {
    fn new(flavor: &'f Flavor, trust: TrustMode) -> Self {
        Self {
            out: String::with_capacity(256),
            flavor,
            trust,
        }
    }

    fn finish(mut self, doc: &Document<'_>) -> String {
        if let Some((open, _)) = self.flavor.wrapper {
            self.out.push_str(open);
        }
        for block in doc.iter() {
            self.block(block);
            self.out.push('\n');
        }
        if let Some((_, close)) = self.flavor.wrapper {
            self.out.push_str(close);
        }
        self.out
    }

    fn block(&mut self, block: &Block<'_>) {
        match block {
            Block::Heading(h) => {
                let level = h.level.get();
                let _ = write!(self.out, "<h{level}>");
                self.runs(&h.content);
                let _ = write!(self.out, "</h{level}>");
            }
            Block::Paragraph(p) => {
                self.out.push_str("<p>");
                self.runs(&p.content);
                self.out.push_str("</p>");
            }
            Block::List(l) => self.list(l),
            Block::Blockquote(q) => {
                self.out.push_str("<blockquote>");
                self.runs(&q.content);
                self.out.push_str("</blockquote>");
            }
            Block::Image(i) => {
                self.out.push_str(self.flavor.image_open);
                self.out.push_str("<img src=\"");
                self.attr(&i.url);
                self.out.push_str("\" alt=\"");
                self.attr(&i.alt);
                self.out.push('"');
                self.out.push_str(self.flavor.image_attrs);
                self.out.push('>');
                self.out.push_str(self.flavor.image_close);
            }
            Block::Video(v) => {
                self.out.push_str("<video src=\"");
                self.attr(&v.url);
                self.out.push('"');
                self.out.push_str(self.flavor.video_attrs);
                self.out.push_str("></video>");
            }
            Block::CodeFence(c) => {
                self.out.push_str("<pre><code>");
                self.text(&c.raw);
                self.out.push_str("</code></pre>");
            }
            Block::Break => self.out.push_str("<br>"),
        }
    }

    fn list(&mut self, list: &List<'_>) {
        let tag = if list.is_ordered() { "ol" } else { "ul" };
        let _ = write!(self.out, "<{tag}>");
        for item in &list.items {
            match item.number {
                Some(n) => {
                    let _ = write!(self.out, "<li value=\"{n}\">");
                }
                None => self.out.push_str("<li>"),
            }
            self.runs(&item.content);
            self.out.push_str("</li>");
        }
        let _ = write!(self.out, "</{tag}>");
    }

    fn runs(&mut self, runs: &[InlineRun<'_>]) {
        for run in runs {
            match run {
                InlineRun::Plain(t) => self.text(t),
                InlineRun::Bold(t) => self.wrap("<strong>", t, "</strong>"),
                InlineRun::Italic(t) => self.wrap("<em>", t, "</em>"),
                InlineRun::BoldItalic(t) => self.wrap("<strong><em>", t, "</em></strong>"),
                InlineRun::Code(t) => self.wrap("<code>", t, "</code>"),
                InlineRun::Link { text, url } => {
                    self.out.push_str("<a href=\"");
                    self.attr(url);
                    self.out.push('"');
                    self.out.push_str(self.flavor.link_attrs);
                    self.out.push('>');
                    self.text(text);
                    self.out.push_str("</a>");
                }
            }
        }
    }

    fn wrap(&mut self, open: &str, text: &str, close: &str) {
        self.out.push_str(open);
        self.text(text);
        self.out.push_str(close);
    }

    fn text(&mut self, text: &str) {
        let text: Cow<'_, str> = match self.trust {
            TrustMode::Trusted => Cow::Borrowed(text),
            TrustMode::Escaped => html_escape::encode_text(text),
        };
        self.out.push_str(&text);
    }

    fn attr(&mut self, value: &str) {
        let value: Cow<'_, str> = match self.trust {
            TrustMode::Trusted => Cow::Borrowed(value),
            TrustMode::Escaped => html_escape::encode_double_quoted_attribute(value),
        };
        self.out.push_str(&value);
    }
}
