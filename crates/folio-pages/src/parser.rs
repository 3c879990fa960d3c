//! Markdown to block tree conversion.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::block::{Block, Cell, Inline, plain_text};

/// Parsed markdown document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Text of the first level-one heading.
    pub title: Option<String>,
    /// Blocks in document order, without the title heading.
    pub body: Vec<Block>,
}

/// Parse markdown into a block tree.
///
/// Tables are enabled. Raw HTML is kept as literal text so placeholders
/// such as `<cluster-name>` survive and are escaped on output. The first H1
/// becomes the title and is removed from the body.
#[must_use]
pub fn parse_markdown(markdown: &str) -> ParsedDocument {
    let mut body = parse_blocks(markdown);

    let title_index = body
        .iter()
        .position(|block| matches!(block, Block::Heading { level: 1, .. }));
    let title = title_index.and_then(|index| match body.remove(index) {
        Block::Heading { content, .. } => Some(plain_text(&content).trim().to_owned()),
        _ => None,
    });

    ParsedDocument { title, body }
}

/// Parse markdown into blocks in source order, headings included.
#[must_use]
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(markdown, Options::ENABLE_TABLES) {
        builder.event(event);
    }
    builder.finish()
}

/// Open element on the builder stack.
enum Frame {
    Heading { level: u8, content: Vec<Inline> },
    /// `implicit` marks the paragraph wrapping text of a tight list item.
    Paragraph { content: Vec<Inline>, implicit: bool },
    List { start: Option<u64>, items: Vec<Vec<Block>> },
    Item(Vec<Block>),
    Quote(Vec<Block>),
    Code { language: Option<String>, code: String },
    Table { header: Vec<Cell>, rows: Vec<Vec<Cell>> },
    Head(Vec<Cell>),
    Row(Vec<Cell>),
    Cell(Cell),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Link { url: String, content: Vec<Inline> },
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<Block>,
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                self.push_inline(Inline::Text(text.into_string()));
            }
            Event::Code(code) => self.push_inline(Inline::Code(code.into_string())),
            Event::SoftBreak => self.push_inline(Inline::Text(" ".to_owned())),
            Event::HardBreak => self.push_inline(Inline::LineBreak),
            Event::Rule => {
                self.close_implicit();
                self.push_block(Block::Rule);
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Heading { level, .. } => Frame::Heading {
                level: heading_level_to_num(level),
                content: Vec::new(),
            },
            Tag::Paragraph | Tag::HtmlBlock => Frame::Paragraph {
                content: Vec::new(),
                implicit: false,
            },
            Tag::List(start) => Frame::List {
                start,
                items: Vec::new(),
            },
            Tag::Item => Frame::Item(Vec::new()),
            Tag::BlockQuote(_) => Frame::Quote(Vec::new()),
            Tag::CodeBlock(kind) => Frame::Code {
                language: match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_owned),
                    CodeBlockKind::Indented => None,
                },
                code: String::new(),
            },
            Tag::Table(_) => Frame::Table {
                header: Vec::new(),
                rows: Vec::new(),
            },
            Tag::TableHead => Frame::Head(Vec::new()),
            Tag::TableRow => Frame::Row(Vec::new()),
            Tag::TableCell => Frame::Cell(Vec::new()),
            Tag::Strong => Frame::Strong(Vec::new()),
            Tag::Emphasis => Frame::Emphasis(Vec::new()),
            Tag::Link { dest_url, .. } => Frame::Link {
                url: dest_url.into_string(),
                content: Vec::new(),
            },
            // Unsupported inline tags contribute their text to the parent.
            _ => return,
        };
        if is_block_frame(&frame) {
            self.close_implicit();
        }
        self.stack.push(frame);
    }

    fn end(&mut self, tag: TagEnd) {
        if !is_tracked_end(tag) {
            return;
        }
        self.close_implicit();
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Heading { level, content } => self.push_block(Block::Heading { level, content }),
            Frame::Paragraph { content, .. } => self.push_paragraph(content),
            Frame::List { start, items } => self.push_block(Block::List { start, items }),
            Frame::Item(blocks) => {
                if let Some(Frame::List { items, .. }) = self.stack.last_mut() {
                    items.push(blocks);
                }
            }
            Frame::Quote(blocks) => self.push_block(Block::Quote(blocks)),
            Frame::Code { language, mut code } => {
                if code.ends_with('\n') {
                    code.pop();
                }
                self.push_block(Block::CodeBlock { language, code });
            }
            Frame::Table { header, rows } => self.push_block(Block::Table { header, rows }),
            Frame::Head(cells) => {
                if let Some(Frame::Table { header, .. }) = self.stack.last_mut() {
                    *header = cells;
                }
            }
            Frame::Row(cells) => {
                if let Some(Frame::Table { rows, .. }) = self.stack.last_mut() {
                    rows.push(cells);
                }
            }
            Frame::Cell(cell) => {
                if let Some(Frame::Head(cells) | Frame::Row(cells)) = self.stack.last_mut() {
                    cells.push(cell);
                }
            }
            Frame::Strong(content) => self.push_inline(Inline::Strong(content)),
            Frame::Emphasis(content) => self.push_inline(Inline::Emphasis(content)),
            Frame::Link { url, content } => self.push_inline(Inline::Link { url, content }),
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_implicit();
        self.root
    }

    fn push_block(&mut self, block: Block) {
        match self.stack.last_mut() {
            Some(Frame::Item(blocks) | Frame::Quote(blocks)) => blocks.push(block),
            _ => self.root.push(block),
        }
    }

    fn push_paragraph(&mut self, mut content: Vec<Inline>) {
        if let Some(Inline::Text(text)) = content.last_mut() {
            let trimmed = text.trim_end().len();
            text.truncate(trimmed);
        }
        if !content.is_empty() {
            self.push_block(Block::Paragraph(content));
        }
    }

    fn push_inline(&mut self, inline: Inline) {
        let target = match self.stack.last_mut() {
            Some(
                Frame::Heading { content, .. }
                | Frame::Paragraph { content, .. }
                | Frame::Strong(content)
                | Frame::Emphasis(content)
                | Frame::Link { content, .. }
                | Frame::Cell(content),
            ) => content,
            Some(Frame::Code { code, .. }) => {
                if let Inline::Text(text) = inline {
                    code.push_str(&text);
                }
                return;
            }
            Some(Frame::Item(_) | Frame::Quote(_)) | None => {
                self.stack.push(Frame::Paragraph {
                    content: Vec::new(),
                    implicit: true,
                });
                return self.push_inline(inline);
            }
            Some(Frame::List { .. } | Frame::Table { .. } | Frame::Head(_) | Frame::Row(_)) => {
                return;
            }
        };
        match (target.last_mut(), inline) {
            (Some(Inline::Text(previous)), Inline::Text(text)) => previous.push_str(&text),
            (_, inline) => target.push(inline),
        }
    }

    /// Close the implicit paragraph of a tight list item, if one is open.
    fn close_implicit(&mut self) {
        if matches!(self.stack.last(), Some(Frame::Paragraph { implicit: true, .. }))
            && let Some(Frame::Paragraph { content, .. }) = self.stack.pop()
        {
            self.push_paragraph(content);
        }
    }
}

fn is_block_frame(frame: &Frame) -> bool {
    !matches!(
        frame,
        Frame::Strong(_) | Frame::Emphasis(_) | Frame::Link { .. }
    )
}

fn is_tracked_end(tag: TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::Heading(_)
            | TagEnd::Paragraph
            | TagEnd::HtmlBlock
            | TagEnd::List(_)
            | TagEnd::Item
            | TagEnd::BlockQuote(_)
            | TagEnd::CodeBlock
            | TagEnd::Table
            | TagEnd::TableHead
            | TagEnd::TableRow
            | TagEnd::TableCell
            | TagEnd::Strong
            | TagEnd::Emphasis
            | TagEnd::Link
    )
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
