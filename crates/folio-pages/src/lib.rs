//! Documentation pages and the site route table.
//!
//! Markdown documents are parsed once with pulldown-cmark into a tree of
//! [`Block`]s. The [`PageRegistry`] maps routes to pages by exact string
//! match and reports unknown routes as [`Resolution::NotFound`].
//!
//! # Example
//!
//! ```
//! use folio_pages::{PageRegistry, Resolution};
//!
//! let registry = PageRegistry::builtin().unwrap();
//! assert_eq!(registry.resolve("/"), Resolution::Home);
//! assert!(matches!(registry.resolve("/docs/kafka-cli"), Resolution::Page(_)));
//! assert_eq!(registry.resolve("/docs/missing"), Resolution::NotFound);
//! ```

mod block;
mod error;
mod page;
mod parser;
mod registry;

pub use block::{Block, Cell, Inline, plain_text};
pub use error::PageError;
pub use page::{CodeBlockRef, DOCS_PREFIX, DocumentPage};
pub use parser::{ParsedDocument, parse_blocks, parse_markdown};
pub use registry::{HOME_ROUTE, PageRegistry, Resolution};
