//! Structured content of a documentation page.

/// Inline run inside a heading, paragraph or table cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// Inline code span.
    Code(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Link {
        url: String,
        content: Vec<Inline>,
    },
    /// Hard line break.
    LineBreak,
}

impl Inline {
    /// Append the unformatted text of this run to `out`.
    pub fn push_plain_text(&self, out: &mut String) {
        match self {
            Self::Text(text) | Self::Code(text) => out.push_str(text),
            Self::Strong(content) | Self::Emphasis(content) | Self::Link { content, .. } => {
                for inline in content {
                    inline.push_plain_text(out);
                }
            }
            Self::LineBreak => out.push(' '),
        }
    }
}

/// Table cell content.
pub type Cell = Vec<Inline>;

/// Block-level element of a page body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading {
        /// Level 1-6.
        level: u8,
        content: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    /// Bulleted list when `start` is `None`, numbered otherwise.
    List {
        start: Option<u64>,
        items: Vec<Vec<Block>>,
    },
    CodeBlock {
        /// First word of the fence info string, if any.
        language: Option<String>,
        code: String,
    },
    Table {
        header: Vec<Cell>,
        rows: Vec<Vec<Cell>>,
    },
    Quote(Vec<Block>),
    Rule,
}

/// Concatenate the unformatted text of inline runs.
#[must_use]
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        inline.push_plain_text(&mut out);
    }
    out
}
