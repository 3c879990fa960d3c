//! Build-time tools for the folio site.
//!
//! - [`StaticSiteBuilder`] renders every route of a [`Site`](folio_site::Site)
//!   to an output directory that any static file host can serve.
//! - [`MarkdownConverter`] turns a directory of loose markdown files into
//!   standalone HTML pages.

mod builder;
mod converter;

pub use builder::{BuildError, BuildReport, StaticSiteBuilder};
pub use converter::{ConversionReport, ConvertError, ConvertedFile, MarkdownConverter};
