//! HTML rendering of documentation block trees.
//!
//! [`HtmlRenderer`] turns the [`Block`](folio_pages::Block) tree of a page
//! into semantic HTML5 and collects a table of contents from H2/H3 headings.
//! Special fenced blocks (diagrams) are delegated to registered
//! [`CodeBlockProcessor`]s.
//!
//! # Example
//!
//! ```
//! use folio_pages::parse_markdown;
//! use folio_renderer::HtmlRenderer;
//!
//! let doc = parse_markdown("# Title\n\n## Install\n\nRun `helm`.");
//! let result = HtmlRenderer::new().render(&doc.body);
//! assert_eq!(result.toc[0].id, "install");
//! assert!(result.html.contains("<code>helm</code>"));
//! ```

mod code_block;
mod escape;
mod renderer;

pub use code_block::{CodeBlockProcessor, ExtractedCodeBlock, ProcessResult};
pub use escape::{escape_html, slugify};
pub use renderer::{HtmlRenderer, RenderResult, TocEntry, render_inlines};
