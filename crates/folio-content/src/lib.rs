//! Read-only content catalog for the portfolio site.
//!
//! The catalog holds two kinds of leaf data:
//! - [`ResourceCategory`] / [`ResourceEntry`]: grouped documentation links
//! - [`Project`]: portfolio showcase items, filterable by [`ProjectCategory`]
//!
//! A [`ContentRegistry`] is built once (usually from the embedded
//! `catalog.yaml`) and never mutated afterwards. Share it with `Arc`.
//!
//! # Example
//!
//! ```
//! use folio_content::{ContentRegistry, ProjectFilter, category_icon};
//!
//! let registry = ContentRegistry::builtin().unwrap();
//! let first = &registry.list_categories()[0];
//! assert_eq!(category_icon(&first.title), "⚡");
//!
//! let ai: Vec<_> = registry.projects(ProjectFilter::parse("ai").unwrap()).collect();
//! assert!(ai.iter().all(|p| p.category.as_str() == "ai"));
//! ```

mod error;
mod filter;
mod icon;
mod model;
mod registry;

pub use error::ContentError;
pub use filter::ProjectFilter;
pub use icon::{DEFAULT_ICON, category_icon};
pub use model::{Project, ProjectCategory, ResourceCategory, ResourceEntry};
pub use registry::ContentRegistry;
