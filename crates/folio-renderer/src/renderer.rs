//! Block tree to HTML rendering.

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use folio_pages::{Block, Inline, plain_text};

use crate::code_block::{CodeBlockProcessor, ExtractedCodeBlock, ProcessResult};
use crate::escape::{escape_html, slugify};

/// Table of contents entry for an H2 or H3 heading.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocEntry {
    /// Heading level (2 or 3).
    pub level: u8,
    pub title: String,
    /// Anchor id of the heading element.
    pub id: String,
}

/// Result of rendering a page body.
#[derive(Clone, Debug)]
pub struct RenderResult {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

/// Renders [`Block`] trees to semantic HTML5.
///
/// Every heading gets a unique slug id; H2 and H3 headings are collected
/// into the table of contents. Text is always escaped.
#[derive(Default)]
pub struct HtmlRenderer {
    processors: Vec<Box<dyn CodeBlockProcessor + Send>>,
    code_block_index: usize,
    id_counts: HashMap<String, usize>,
    used_ids: HashSet<String>,
    toc: Vec<TocEntry>,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a code block processor.
    ///
    /// Processors are checked in order; the first non-`PassThrough` result
    /// wins.
    #[must_use]
    pub fn with_processor<P: CodeBlockProcessor + Send + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Render a page body.
    ///
    /// Heading ids, code block indices and the table of contents restart for
    /// every call.
    pub fn render(&mut self, blocks: &[Block]) -> RenderResult {
        self.code_block_index = 0;
        self.id_counts.clear();
        self.used_ids.clear();
        self.toc.clear();

        let mut html = String::with_capacity(4096);
        self.blocks(blocks, &mut html);
        RenderResult {
            html,
            toc: std::mem::take(&mut self.toc),
        }
    }

    /// Blocks extracted as placeholders by all processors.
    pub fn extracted_code_blocks(&self) -> impl Iterator<Item = &ExtractedCodeBlock> + '_ {
        self.processors.iter().flat_map(|p| p.extracted())
    }

    /// Let every processor replace its placeholders in `html`.
    pub fn finalize(&mut self, html: &mut String) {
        for processor in &mut self.processors {
            processor.post_process(html);
        }
    }

    fn blocks(&mut self, blocks: &[Block], out: &mut String) {
        for block in blocks {
            self.block(block, out);
        }
    }

    fn block(&mut self, block: &Block, out: &mut String) {
        match block {
            Block::Heading { level, content } => self.heading(*level, content, out),
            Block::Paragraph(content) => {
                out.push_str("<p>");
                inlines(content, out);
                out.push_str("</p>");
            }
            Block::List { start, items } => {
                match start {
                    None => out.push_str("<ul>"),
                    Some(1) => out.push_str("<ol>"),
                    Some(n) => {
                        let _ = write!(out, r#"<ol start="{n}">"#);
                    }
                }
                for item in items {
                    out.push_str("<li>");
                    match item.as_slice() {
                        [Block::Paragraph(content)] => inlines(content, out),
                        blocks => self.blocks(blocks, out),
                    }
                    out.push_str("</li>");
                }
                out.push_str(if start.is_some() { "</ol>" } else { "</ul>" });
            }
            Block::CodeBlock { language, code } => {
                self.code_block(language.as_deref(), code, out);
            }
            Block::Table { header, rows } => {
                out.push_str("<table><thead><tr>");
                for cell in header {
                    out.push_str("<th>");
                    inlines(cell, out);
                    out.push_str("</th>");
                }
                out.push_str("</tr></thead><tbody>");
                for row in rows {
                    out.push_str("<tr>");
                    for cell in row {
                        out.push_str("<td>");
                        inlines(cell, out);
                        out.push_str("</td>");
                    }
                    out.push_str("</tr>");
                }
                out.push_str("</tbody></table>");
            }
            Block::Quote(blocks) => {
                out.push_str("<blockquote>");
                self.blocks(blocks, out);
                out.push_str("</blockquote>");
            }
            Block::Rule => out.push_str("<hr>"),
        }
    }

    fn heading(&mut self, level: u8, content: &[Inline], out: &mut String) {
        let title = plain_text(content).trim().to_owned();
        let id = self.unique_id(&title);
        let _ = write!(out, r#"<h{level} id="{id}">"#);
        inlines(content, out);
        let _ = write!(out, "</h{level}>");

        if matches!(level, 2 | 3) {
            self.toc.push(TocEntry { level, title, id });
        }
    }

    /// Slug of `text`, suffixed `-1`, `-2`, ... until no earlier heading
    /// on the page uses it.
    fn unique_id(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base.push_str("section");
        }
        let count = self.id_counts.entry(base.clone()).or_default();
        let mut id = base.clone();
        while self.used_ids.contains(&id) {
            *count += 1;
            id = format!("{base}-{count}");
        }
        self.used_ids.insert(id.clone());
        id
    }

    fn code_block(&mut self, language: Option<&str>, code: &str, out: &mut String) {
        let index = self.code_block_index;
        self.code_block_index += 1;

        let lang = language.unwrap_or_default();
        for processor in &mut self.processors {
            match processor.process(lang, code, index) {
                ProcessResult::Placeholder(html) | ProcessResult::Inline(html) => {
                    out.push_str(&html);
                    return;
                }
                ProcessResult::PassThrough => {}
            }
        }

        match language {
            Some(lang) => {
                let _ = write!(
                    out,
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    escape_html(lang),
                    escape_html(code)
                );
            }
            None => {
                let _ = write!(out, "<pre><code>{}</code></pre>", escape_html(code));
            }
        }
    }
}

fn inlines(content: &[Inline], out: &mut String) {
    for inline in content {
        match inline {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::Code(code) => {
                let _ = write!(out, "<code>{}</code>", escape_html(code));
            }
            Inline::Strong(content) => {
                out.push_str("<strong>");
                inlines(content, out);
                out.push_str("</strong>");
            }
            Inline::Emphasis(content) => {
                out.push_str("<em>");
                inlines(content, out);
                out.push_str("</em>");
            }
            Inline::Link { url, content } => {
                let _ = write!(out, r#"<a href="{}""#, escape_html(url));
                if url.starts_with("http://") || url.starts_with("https://") {
                    out.push_str(r#" target="_blank" rel="noopener noreferrer""#);
                }
                out.push('>');
                inlines(content, out);
                out.push_str("</a>");
            }
            Inline::LineBreak => out.push_str("<br>"),
        }
    }
}

/// Render inline runs without a surrounding element.
#[must_use]
pub fn render_inlines(content: &[Inline]) -> String {
    let mut out = String::new();
    inlines(content, &mut out);
    out
}
