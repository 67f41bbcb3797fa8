//! # Quillmark Core
//!
//! A constrained-markup renderer for blog content.
//!
//! Authors write a small, line-oriented markup in a plain textarea. This crate
//! turns that text into a [`Document`] of blocks with styled inline runs, and
//! renders the document onto a presentation surface. The editor's live preview
//! and the public article page both go through the same parser, so they can
//! only differ in presentation.
//!
//! ## Quick Start
//!
//! ```rust
//! use quillmark_core::{render, Block, InlineRun};
//!
//! let doc = render("## Care guide\n\nWash **cold**, dry flat.");
//! assert_eq!(doc.blocks.len(), 3);
//! assert!(matches!(doc.blocks[1], Block::Break));
//!
//! if let Block::Paragraph(p) = &doc.blocks[2] {
//!     assert_eq!(p.content[1], InlineRun::Bold("cold".into()));
//! }
//! ```
//!
//! ## Diagnostics
//!
//! Rendering never fails; malformed markup falls back to plain text. Editors
//! can still ask which lines degraded:
//!
//! ```rust
//! use quillmark_core::Parser;
//!
//! let result = Parser::new().parse_with_diagnostics("#### Too deep\nan *open marker");
//! assert_eq!(result.diagnostics.len(), 2);
//! ```
//!
//! ## Surfaces
//!
//! - [`surface::PreviewRenderer`] - HTML fragment for the authoring preview
//! - [`surface::ArticleRenderer`] - HTML for the public article page
//! - [`surface::TextRenderer`] - plain text for terminals

pub mod ast;
pub mod classify;
pub mod error;
pub mod inline;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod surface;

pub use ast::{Block, BlockKind, Document, FenceMode, InlineRun};
pub use error::{Diagnostic, DiagnosticKind, Diagnostics};
pub use parser::{ParseResult, Parser};

/// Parse text with default options.
///
/// Empty input gives an empty document. Equivalent to
/// `Parser::new().parse(input)`.
pub fn render(input: &str) -> Document<'_> {
    Parser::new().parse(input)
}

/// Report lines that degraded under default options.
pub fn lint(input: &str) -> Diagnostics {
    Parser::new().parse_with_diagnostics(input).diagnostics
}
