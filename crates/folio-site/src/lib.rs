//! Portfolio site views and composition.
//!
//! [`Site`] ties the content catalog, documentation pages, diagram renderer
//! and clock together and renders complete HTML documents:
//!
//! - the landing page (hero, [project showcase](ProjectShowcase), resources)
//! - documentation pages with inline diagram viewers
//! - a not-found fallback
//!
//! Interactive state that would live in a browser is modelled explicitly:
//! [`ProjectShowcase`] for filter and hover, [`Navigator`] for the active
//! route and scroll reset.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use folio_config::SiteConfig;
//! use folio_site::{FixedClock, ProjectShowcase, Site};
//!
//! let site = Site::builtin(SiteConfig::default())
//!     .unwrap()
//!     .with_clock(Arc::new(FixedClock::new(2025)));
//! let html = site.render_home(&ProjectShowcase::new());
//! assert!(html.contains("© 2025"));
//! ```

pub mod assets;
mod clock;
mod diagrams;
mod error;
mod navigator;
mod shell;
mod showcase;
mod site;
pub mod views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::SiteError;
pub use navigator::{Navigator, ScrollOffset, View};
pub use shell::{SCRIPT_PATH, STYLESHEET_PATH, Shell, copyright};
pub use showcase::ProjectShowcase;
pub use site::{RenderedDocument, RoutedPage, Site};
