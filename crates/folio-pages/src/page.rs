//! Documentation page entity.

use crate::block::Block;

/// Route prefix shared by every documentation page.
pub const DOCS_PREFIX: &str = "/docs/";

/// A long-form documentation page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentPage {
    /// Unique route, e.g. `/docs/kafka-cli`.
    pub route: String,
    pub title: String,
    pub body: Vec<Block>,
}

/// Reference to a fenced code block inside a page body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeBlockRef<'a> {
    /// Zero-based position in depth-first document order.
    pub index: usize,
    pub language: Option<&'a str>,
    pub code: &'a str,
}

impl DocumentPage {
    /// Route without the `/docs/` prefix.
    #[must_use]
    pub fn slug(&self) -> &str {
        self.route.strip_prefix(DOCS_PREFIX).unwrap_or(&self.route)
    }

    /// Every code block of the page in depth-first order.
    #[must_use]
    pub fn code_blocks(&self) -> Vec<CodeBlockRef<'_>> {
        let mut out = Vec::new();
        collect_code_blocks(&self.body, &mut out);
        out
    }
}

fn collect_code_blocks<'a>(blocks: &'a [Block], out: &mut Vec<CodeBlockRef<'a>>) {
    for block in blocks {
        match block {
            Block::CodeBlock { language, code } => out.push(CodeBlockRef {
                index: out.len(),
                language: language.as_deref(),
                code,
            }),
            Block::List { items, .. } => {
                for item in items {
                    collect_code_blocks(item, out);
                }
            }
            Block::Quote(inner) => collect_code_blocks(inner, out),
            Block::Heading { .. } | Block::Paragraph(_) | Block::Table { .. } | Block::Rule => {}
        }
    }
}
