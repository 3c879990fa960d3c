//! Code block processor hook.
//!
//! Processors are registered with the renderer and consulted in order for
//! every fenced code block. The first result other than
//! [`ProcessResult::PassThrough`] wins.
//!
//! # Example
//!
//! ```
//! use folio_renderer::{CodeBlockProcessor, ExtractedCodeBlock, ProcessResult};
//!
//! #[derive(Default)]
//! struct DiagramProcessor {
//!     extracted: Vec<ExtractedCodeBlock>,
//! }
//!
//! impl CodeBlockProcessor for DiagramProcessor {
//!     fn process(&mut self, language: &str, source: &str, index: usize) -> ProcessResult {
//!         if language == "mermaid" {
//!             self.extracted.push(ExtractedCodeBlock {
//!                 index,
//!                 language: language.to_owned(),
//!                 source: source.to_owned(),
//!             });
//!             ProcessResult::Placeholder(format!("<!--diagram:{index}-->"))
//!         } else {
//!             ProcessResult::PassThrough
//!         }
//!     }
//!
//!     fn extracted(&self) -> &[ExtractedCodeBlock] {
//!         &self.extracted
//!     }
//! }
//! ```

/// Result of processing a code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessResult {
    /// Replace the block with a placeholder filled in after rendering.
    ///
    /// Use when processing needs external resources (HTTP calls).
    Placeholder(String),

    /// Replace the block with HTML immediately.
    Inline(String),

    /// Render as a regular `<pre><code>` block.
    PassThrough,
}

/// Code block captured for deferred processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedCodeBlock {
    /// Zero-based index of the code block in the document.
    pub index: usize,
    /// Fence language, e.g. `mermaid`.
    pub language: String,
    pub source: String,
}

/// Hook for special code blocks such as diagrams.
pub trait CodeBlockProcessor {
    /// Process a code block.
    ///
    /// # Arguments
    ///
    /// * `language` - Fence language (empty when the fence has none)
    /// * `source` - Raw block content
    /// * `index` - Zero-based index for placeholder generation
    fn process(&mut self, language: &str, source: &str, index: usize) -> ProcessResult;

    /// Replace placeholders in rendered HTML.
    ///
    /// Called by [`HtmlRenderer::finalize`](crate::HtmlRenderer::finalize).
    fn post_process(&mut self, _html: &mut String) {}

    /// Blocks returned as placeholders so far.
    fn extracted(&self) -> &[ExtractedCodeBlock] {
        &[]
    }
}
