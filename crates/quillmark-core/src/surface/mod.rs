//! Presentation surfaces.
//!
//! A surface turns a parsed [`Document`] into output. Surfaces never look at
//! the source text: the editor preview and the public article page render the
//! same document, so the two can only differ in presentation.
//!
//! ```rust
//! use quillmark_core::surface::{ArticleRenderer, PreviewRenderer, Renderer};
//!
//! let doc = quillmark_core::render("# Spring sale\n\nUp to **40%** off.");
//! let preview = PreviewRenderer::default().render(&doc);
//! let article = ArticleRenderer::default().render(&doc);
//! assert!(preview.contains("<strong>40%</strong>"));
//! assert!(article.starts_with("<article"));
//! ```

mod html;
mod text;

pub use html::{ArticleRenderer, PreviewRenderer};
pub use text::TextRenderer;

use crate::ast::Document;

/// Maps a document onto one presentation surface.
pub trait Renderer {
    /// Render the whole document.
    fn render(&self, doc: &Document<'_>) -> String;
}

/// Whether authored text is trusted when written into HTML.
///
/// Content is authored by administrators, so the default interpolates text
/// as-is, including any raw HTML the author typed. Feeding untrusted input
/// through [`TrustMode::Trusted`] is a cross-site scripting exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrustMode {
    /// Write text and attribute values unmodified.
    #[default]
    Trusted,
    /// Escape text and attribute values.
    Escaped,
}

/// Options shared by the HTML surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HtmlOptions {
    trust: TrustMode,
}

impl HtmlOptions {
    /// Create options with defaults ([`TrustMode::Trusted`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trust mode.
    pub fn with_trust(mut self, trust: TrustMode) -> Self {
        self.trust = trust;
        self
    }

    /// The configured trust mode.
    pub fn trust(&self) -> TrustMode {
        self.trust
    }
}
