//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};

use folio_site::{Navigator, ProjectShowcase, SCRIPT_PATH, STYLESHEET_PATH, Site, assets};
use rayon::prelude::*;

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    /// Documentation pages written (home and 404 not counted).
    pub pages: usize,
}

/// Writes every route of a site as static HTML.
///
/// Layout:
/// - `index.html` for `/`
/// - `docs/<slug>/index.html` for each documentation page
/// - `404.html`
/// - `assets/site.css`, `assets/site.js`
pub struct StaticSiteBuilder<'a> {
    site: &'a Site,
}

impl<'a> StaticSiteBuilder<'a> {
    #[must_use]
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Render and write the site.
    ///
    /// Documentation pages are rendered in parallel. Diagrams are resolved
    /// through the site's renderer on the rayon workers.
    pub fn build(&self, out_dir: &Path) -> Result<BuildReport, BuildError> {
        tracing::info!(out_dir = %out_dir.display(), "Building static site");

        write(&out_dir.join("index.html"), &self.render("/"))?;
        write(&out_dir.join("404.html"), &self.render("/404"))?;
        for path in [STYLESHEET_PATH, SCRIPT_PATH] {
            if let Some((body, _)) = assets::lookup(path) {
                write(&out_dir.join(path.trim_start_matches('/')), body)?;
            }
        }

        self.site
            .pages()
            .pages()
            .par_iter()
            .try_for_each(|page| {
                let path = out_dir.join("docs").join(page.slug()).join("index.html");
                write(&path, &self.render(&page.route))?;
                tracing::debug!(route = %page.route, path = %path.display(), "Wrote page");
                Ok(())
            })?;

        let report = BuildReport {
            out_dir: out_dir.to_path_buf(),
            pages: self.site.pages().len(),
        };
        tracing::info!(pages = report.pages, "Static site built");
        Ok(report)
    }

    /// Each file is a fresh page load, so every one asks for a scroll reset.
    fn render(&self, route: &str) -> String {
        self.site
            .render_route_blocking(&mut Navigator::new(), route, &ProjectShowcase::new())
            .into_html()
    }
}

fn write(path: &Path, contents: &str) -> Result<(), BuildError> {
    let wrap = |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, contents).map_err(wrap)
}
