//! Site composition root.

use std::sync::Arc;

use folio_background::{BackgroundConfig, Frame};
use folio_config::SiteConfig;
use folio_content::ContentRegistry;
use folio_diagrams::{DiagramRenderer, DisabledRenderer};
use folio_pages::{DocumentPage, PageRegistry};
use folio_renderer::{ExtractedCodeBlock, HtmlRenderer, RenderResult, TocEntry};

use crate::clock::{Clock, SystemClock};
use crate::diagrams::{self, DiagramProcessor};
use crate::error::SiteError;
use crate::navigator::{Navigator, View};
use crate::shell::Shell;
use crate::showcase::ProjectShowcase;
use crate::views;

/// A documentation page rendered to HTML, diagrams included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedDocument {
    pub route: String,
    pub title: String,
    /// Body HTML without the page chrome.
    pub html: String,
    pub toc: Vec<TocEntry>,
    /// Number of diagram blocks on the page.
    pub diagrams: usize,
}

/// Outcome of rendering a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutedPage {
    Found(String),
    /// Fallback view for an unknown route.
    NotFound(String),
}

impl RoutedPage {
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            Self::Found(html) | Self::NotFound(html) => html,
        }
    }

    #[must_use]
    pub fn into_html(self) -> String {
        match self {
            Self::Found(html) | Self::NotFound(html) => html,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// View resolved for a route, documents already rendered.
enum Resolved {
    Home,
    Document(RenderedDocument),
    NotFound,
}

/// Everything needed to render the portfolio: identity, catalog, pages and
/// the injectable collaborators (clock, diagram renderer).
///
/// Cheap to share behind an `Arc`; rendering never mutates it.
pub struct Site {
    config: SiteConfig,
    content: ContentRegistry,
    pages: PageRegistry,
    clock: Arc<dyn Clock>,
    diagrams: Arc<dyn DiagramRenderer>,
    background: BackgroundConfig,
    hero_frame: Frame,
}

impl Site {
    /// Assemble a site.
    ///
    /// Fails when a resource entry links to an internal route that no page
    /// serves. Diagrams are disabled until a renderer is supplied with
    /// [`with_diagram_renderer`](Self::with_diagram_renderer).
    pub fn new(
        config: SiteConfig,
        content: ContentRegistry,
        pages: PageRegistry,
    ) -> Result<Self, SiteError> {
        content.validate_links(|route| pages.contains(route))?;
        let background = BackgroundConfig::default();
        Ok(Self {
            config,
            content,
            pages,
            clock: Arc::new(SystemClock),
            diagrams: Arc::new(DisabledRenderer),
            hero_frame: views::hero::snapshot(background.particles, background.seed),
            background,
        })
    }

    /// Site backed by the catalog and pages embedded in the binary.
    pub fn builtin(config: SiteConfig) -> Result<Self, SiteError> {
        Self::new(config, ContentRegistry::builtin()?, PageRegistry::builtin()?)
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_diagram_renderer(mut self, renderer: Arc<dyn DiagramRenderer>) -> Self {
        self.diagrams = renderer;
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: BackgroundConfig) -> Self {
        self.hero_frame = views::hero::snapshot(background.particles, background.seed);
        self.background = background;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn content(&self) -> &ContentRegistry {
        &self.content
    }

    #[must_use]
    pub fn pages(&self) -> &PageRegistry {
        &self.pages
    }

    #[must_use]
    pub fn background(&self) -> BackgroundConfig {
        self.background
    }

    #[must_use]
    pub fn diagram_renderer(&self) -> Arc<dyn DiagramRenderer> {
        Arc::clone(&self.diagrams)
    }

    #[must_use]
    pub fn shell(&self) -> Shell<'_> {
        Shell::new(&self.config, self.clock.as_ref())
    }

    /// Landing page: hero, projects and resources.
    #[must_use]
    pub fn render_home(&self, showcase: &ProjectShowcase) -> String {
        self.shell()
            .document(&self.config.headline, &self.home_main(showcase))
    }

    /// Render a page body, resolving diagrams on the blocking pool.
    ///
    /// Diagram failures are embedded inline; the rest of the page renders
    /// normally.
    pub async fn render_document(&self, page: &DocumentPage) -> RenderedDocument {
        let (mut result, blocks) = render_body(page);
        for block in &blocks {
            let state = diagrams::render_async(&self.diagrams, block).await;
            diagrams::substitute(&mut result.html, block.index, &state);
        }
        finish(page, result, blocks.len())
    }

    /// Same as [`render_document`](Self::render_document) without a runtime.
    #[must_use]
    pub fn render_document_blocking(&self, page: &DocumentPage) -> RenderedDocument {
        let (mut result, blocks) = render_body(page);
        for block in &blocks {
            let state = diagrams::render_blocking(self.diagrams.as_ref(), block);
            diagrams::substitute(&mut result.html, block.index, &state);
        }
        finish(page, result, blocks.len())
    }

    /// Navigate to `route` and render the view it resolves to.
    ///
    /// The document is marked for a scroll reset when the navigation
    /// changed the active route.
    pub async fn render_route(
        &self,
        navigator: &mut Navigator,
        route: &str,
        showcase: &ProjectShowcase,
    ) -> RoutedPage {
        let resolved = match navigator.navigate(&self.pages, route) {
            View::Home => Resolved::Home,
            View::Document(page) => Resolved::Document(self.render_document(page).await),
            View::NotFound => Resolved::NotFound,
        };
        self.routed(navigator.scroll_reset(), route, showcase, resolved)
    }

    /// Same as [`render_route`](Self::render_route) without a runtime.
    pub fn render_route_blocking(
        &self,
        navigator: &mut Navigator,
        route: &str,
        showcase: &ProjectShowcase,
    ) -> RoutedPage {
        let resolved = match navigator.navigate(&self.pages, route) {
            View::Home => Resolved::Home,
            View::Document(page) => Resolved::Document(self.render_document_blocking(page)),
            View::NotFound => Resolved::NotFound,
        };
        self.routed(navigator.scroll_reset(), route, showcase, resolved)
    }

    fn routed(
        &self,
        scroll_reset: bool,
        route: &str,
        showcase: &ProjectShowcase,
        resolved: Resolved,
    ) -> RoutedPage {
        let shell = self.shell().with_scroll_reset(scroll_reset);
        match resolved {
            Resolved::Home => RoutedPage::Found(
                shell.document(&self.config.headline, &self.home_main(showcase)),
            ),
            Resolved::Document(doc) => {
                tracing::debug!(route = %doc.route, diagrams = doc.diagrams, "Rendered page");
                RoutedPage::Found(shell.document(&doc.title, &document_main(&doc)))
            }
            Resolved::NotFound => {
                tracing::debug!(route, "No page for route");
                RoutedPage::NotFound(shell.document(NOT_FOUND_TITLE, &not_found_main(route)))
            }
        }
    }

    fn home_main(&self, showcase: &ProjectShowcase) -> String {
        let mut main = String::with_capacity(32 * 1024);
        views::hero::render(&mut main, &self.config, &self.hero_frame);
        views::projects::render(&mut main, &self.content, showcase);
        views::resources::render(&mut main, &self.content);
        main
    }
}

const NOT_FOUND_TITLE: &str = "Page not found";

fn document_main(doc: &RenderedDocument) -> String {
    let mut main = String::with_capacity(doc.html.len() + 2048);
    views::document::render(&mut main, doc);
    main
}

fn not_found_main(route: &str) -> String {
    let mut main = String::new();
    views::not_found::render(&mut main, route);
    main
}

fn render_body(page: &DocumentPage) -> (RenderResult, Vec<ExtractedCodeBlock>) {
    let mut renderer = HtmlRenderer::new().with_processor(DiagramProcessor::default());
    let result = renderer.render(&page.body);
    let blocks = renderer.extracted_code_blocks().cloned().collect();
    (result, blocks)
}

fn finish(page: &DocumentPage, result: RenderResult, diagrams: usize) -> RenderedDocument {
    RenderedDocument {
        route: page.route.clone(),
        title: page.title.clone(),
        html: result.html,
        toc: result.toc,
        diagrams,
    }
}

#[cfg(test)]
mod tests {
    use folio_diagrams::{DiagramError, DiagramLanguage};
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::clock::FixedClock;

    assert_impl_all!(Site: Send, Sync);

    struct EchoRenderer;

    impl DiagramRenderer for EchoRenderer {
        fn render(&self, _: DiagramLanguage, source: &str) -> Result<String, DiagramError> {
            Ok(format!("<svg data-lines=\"{}\"></svg>", source.lines().count()))
        }
    }

    struct FailingRenderer;

    impl DiagramRenderer for FailingRenderer {
        fn render(&self, _: DiagramLanguage, _: &str) -> Result<String, DiagramError> {
            Err(DiagramError::Http("502 Bad Gateway".to_owned()))
        }
    }

    const DIAGRAM_ROUTE: &str = "/docs/iam-roles-anywhere-setup";

    fn site() -> Site {
        Site::builtin(SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_dangling_resource_link_rejected() {
        let pages = PageRegistry::from_sources([("/docs/other", "# Other\n")]).unwrap();
        let err = Site::new(SiteConfig::default(), ContentRegistry::builtin().unwrap(), pages)
            .err()
            .unwrap();
        assert!(matches!(err, SiteError::Content(_)));
    }

    #[test]
    fn test_home_contains_all_sections_in_order() {
        let html = site().render_home(&ProjectShowcase::new());
        let hero = html.find("class=\"hero\"").unwrap();
        let projects = html.find("id=\"projects\"").unwrap();
        let resources = html.find("id=\"resources\"").unwrap();
        let footer = html.find("<footer").unwrap();
        assert!(hero < projects && projects < resources && resources < footer);
    }

    #[test]
    fn test_footer_year_follows_clock() {
        let clock = Arc::new(FixedClock::new(2024));
        let site = site().with_clock(Arc::clone(&clock) as Arc<dyn Clock>);

        assert!(site.render_home(&ProjectShowcase::new()).contains("© 2024 Abhishek Chandra"));
        clock.set_year(2025);
        let missing = site.render_route_blocking(&mut Navigator::new(), "/x", &ProjectShowcase::new());
        assert!(missing.html().contains("© 2025 Abhishek Chandra"));
    }

    #[tokio::test]
    async fn test_document_with_diagram() {
        let site = site().with_diagram_renderer(Arc::new(EchoRenderer));
        let page = site.pages().get(DIAGRAM_ROUTE).unwrap();

        let doc = site.render_document(page).await;

        assert_eq!(doc.diagrams, 1);
        assert!(doc.html.contains("<svg data-lines="));
        assert!(doc.html.contains(folio_diagrams::HINT));
        assert!(!doc.html.contains("<!--diagram:"));
        assert!(!doc.html.contains("language-mermaid"));
    }

    #[tokio::test]
    async fn test_diagram_failure_is_inline() {
        let site = site().with_diagram_renderer(Arc::new(FailingRenderer));
        let page = site.pages().get(DIAGRAM_ROUTE).unwrap();

        let doc = site.render_document(page).await;

        assert!(doc.html.contains("Error rendering diagram: HTTP error: 502 Bad Gateway"));
        assert!(!doc.toc.is_empty());
        assert!(doc.html.contains("<pre><code"));
    }

    #[test]
    fn test_blocking_matches_async_result() {
        let site = site().with_diagram_renderer(Arc::new(EchoRenderer));
        let page = site.pages().get(DIAGRAM_ROUTE).unwrap();
        let blocking = site.render_document_blocking(page);

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let asynchronous = runtime.block_on(site.render_document(page));

        assert_eq!(blocking, asynchronous);
    }

    #[test]
    fn test_disabled_diagrams_render_error() {
        let site = site();
        let page = site.pages().get(DIAGRAM_ROUTE).unwrap();
        let doc = site.render_document_blocking(page);
        assert!(doc.html.contains("diagram rendering is disabled"));
    }

    #[tokio::test]
    async fn test_route_resolution() {
        let site = site();
        let showcase = ProjectShowcase::new();
        let mut nav = Navigator::new();

        assert!(site.render_route(&mut nav, "/", &showcase).await.is_found());

        let doc = site.render_route(&mut nav, "/docs/kafka-cli", &showcase).await;
        assert!(doc.is_found());
        assert!(doc.html().contains("<h1 class=\"doc-title\">Kafka CLI Tools</h1>"));

        let missing = site.render_route(&mut nav, "/docs/nope", &showcase).await;
        assert!(!missing.is_found());
        assert!(missing.html().contains("Page not found"));
        assert_eq!(nav.active_route(), Some("/docs/nope"));
    }

    #[tokio::test]
    async fn test_route_change_marks_scroll_reset() {
        let site = site();
        let showcase = ProjectShowcase::new();
        let mut nav = Navigator::at("/");

        let doc = site.render_route(&mut nav, "/docs/kafka-cli", &showcase).await;
        assert!(doc.html().contains("<body data-scroll-reset>"));

        let again = site.render_route(&mut nav, "/docs/kafka-cli", &showcase).await;
        assert!(again.html().contains("<body>\n"));
        assert!(!again.html().contains("data-scroll-reset"));
    }

    #[test]
    fn test_blocking_route_matches_async_route() {
        let site = site().with_diagram_renderer(Arc::new(EchoRenderer));
        let showcase = ProjectShowcase::new();
        let blocking = site.render_route_blocking(&mut Navigator::new(), DIAGRAM_ROUTE, &showcase);

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let asynchronous =
            runtime.block_on(site.render_route(&mut Navigator::new(), DIAGRAM_ROUTE, &showcase));

        assert_eq!(blocking, asynchronous);
    }
}
