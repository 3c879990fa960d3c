//! Route navigation with scroll reset.

use folio_pages::{DocumentPage, PageRegistry, Resolution};

/// Scroll position of the viewport in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    pub const TOP: Self = Self { x: 0.0, y: 0.0 };
}

/// View selected by a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Home,
    Document(&'a DocumentPage),
    NotFound,
}

/// Tracks the active route and the scroll offset of the viewport.
///
/// Whenever the active route changes, the offset is reset to the top before
/// the new view is returned, so the new content never appears scrolled.
#[derive(Debug, Default)]
pub struct Navigator {
    active: Option<String>,
    scroll: ScrollOffset,
    scroll_reset: bool,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator already showing `route`, e.g. the page a request came from.
    #[must_use]
    pub fn at(route: impl Into<String>) -> Self {
        Self {
            active: Some(route.into()),
            ..Self::default()
        }
    }

    /// Whether the last [`navigate`](Self::navigate) reset the scroll offset.
    #[must_use]
    pub fn scroll_reset(&self) -> bool {
        self.scroll_reset
    }

    #[must_use]
    pub fn active_route(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    /// Record a user scroll.
    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.scroll = ScrollOffset { x, y };
    }

    /// Navigate to `route` and return the view to paint.
    ///
    /// Navigating to the current route leaves the scroll offset untouched.
    pub fn navigate<'a>(&mut self, pages: &'a PageRegistry, route: &str) -> View<'a> {
        self.scroll_reset = self.active.as_deref() != Some(route);
        if self.scroll_reset {
            self.scroll = ScrollOffset::TOP;
            self.active = Some(route.to_owned());
            tracing::debug!(route, "Navigated");
        }

        match pages.resolve(route) {
            Resolution::Home => View::Home,
            Resolution::Page(page) => View::Document(page),
            Resolution::NotFound => View::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> PageRegistry {
        PageRegistry::builtin().unwrap()
    }

    #[test]
    fn test_route_change_resets_scroll() {
        let pages = pages();
        let mut nav = Navigator::new();

        nav.navigate(&pages, "/docs/kafka-cli");
        nav.scroll_to(0.0, 1250.0);

        let view = nav.navigate(&pages, "/docs/keda-install");

        assert_eq!(nav.scroll(), ScrollOffset::TOP);
        assert!(matches!(view, View::Document(p) if p.route == "/docs/keda-install"));
    }

    #[test]
    fn test_same_route_keeps_scroll() {
        let pages = pages();
        let mut nav = Navigator::new();
        nav.navigate(&pages, "/");
        nav.scroll_to(10.0, 300.0);

        assert_eq!(nav.navigate(&pages, "/"), View::Home);
        assert_eq!(nav.scroll(), ScrollOffset { x: 10.0, y: 300.0 });
    }

    #[test]
    fn test_navigator_started_at_previous_route() {
        let pages = pages();

        let mut same = Navigator::at("/docs/kafka-cli");
        same.navigate(&pages, "/docs/kafka-cli");
        assert!(!same.scroll_reset());

        let mut other = Navigator::at("/");
        other.navigate(&pages, "/docs/kafka-cli");
        assert!(other.scroll_reset());
        assert_eq!(other.active_route(), Some("/docs/kafka-cli"));

        let mut fresh = Navigator::new();
        fresh.navigate(&pages, "/");
        assert!(fresh.scroll_reset());
    }

    #[test]
    fn test_unknown_route_resets_and_falls_back() {
        let pages = pages();
        let mut nav = Navigator::new();
        nav.navigate(&pages, "/");
        nav.scroll_to(0.0, 900.0);

        assert_eq!(nav.navigate(&pages, "/nope"), View::NotFound);
        assert_eq!(nav.scroll(), ScrollOffset::TOP);
        assert_eq!(nav.active_route(), Some("/nope"));
    }

    #[test]
    fn test_every_route_resets_from_every_other() {
        let pages = pages();
        let routes: Vec<_> = std::iter::once("/").chain(pages.routes()).collect();
        for from in &routes {
            for to in &routes {
                if from == to {
                    continue;
                }
                let mut nav = Navigator::new();
                nav.navigate(&pages, from);
                nav.scroll_to(3.0, 400.0);
                nav.navigate(&pages, to);
                assert_eq!(nav.scroll(), ScrollOffset::TOP, "{from} -> {to}");
            }
        }
    }
}
