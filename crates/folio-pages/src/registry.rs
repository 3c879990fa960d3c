//! Page registry and router.

use std::collections::HashMap;

use crate::page::DOCS_PREFIX;
use crate::{DocumentPage, PageError, parse_markdown};

/// Route of the home view.
pub const HOME_ROUTE: &str = "/";

/// Documents embedded at compile time, in registration order.
const BUILTIN_PAGES: &[(&str, &str)] = &[
    ("/docs/k8s-node-debug", include_str!("../docs/k8s-node-debug.md")),
    ("/docs/keda-install", include_str!("../docs/keda-install.md")),
    ("/docs/ec2-pressure-check", include_str!("../docs/ec2-pressure-check.md")),
    (
        "/docs/keda-driven-autoscaling",
        include_str!("../docs/keda-driven-autoscaling.md"),
    ),
    (
        "/docs/keda-knative-kafka-scaling",
        include_str!("../docs/keda-knative-kafka-scaling.md"),
    ),
    ("/docs/aks-amp-oidc-config", include_str!("../docs/aks-amp-oidc-config.md")),
    (
        "/docs/kafka-knative-amp-setup",
        include_str!("../docs/kafka-knative-amp-setup.md"),
    ),
    (
        "/docs/troubleshooting-grafana",
        include_str!("../docs/troubleshooting-grafana.md"),
    ),
    (
        "/docs/blackbox-exporter-setup",
        include_str!("../docs/blackbox-exporter-setup.md"),
    ),
    ("/docs/vector-install", include_str!("../docs/vector-install.md")),
    ("/docs/kafka-cli", include_str!("../docs/kafka-cli.md")),
    ("/docs/net-tools-pod", include_str!("../docs/net-tools-pod.md")),
    (
        "/docs/iam-roles-anywhere-setup",
        include_str!("../docs/iam-roles-anywhere-setup.md"),
    ),
];

/// Outcome of resolving a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The home view (`/`).
    Home,
    Page(&'a DocumentPage),
    /// No view is registered; render the fallback.
    NotFound,
}

/// Immutable route table of documentation pages.
///
/// Resolution is an exact string match. There are no patterns, wildcards or
/// trailing-slash normalisation.
#[derive(Debug)]
pub struct PageRegistry {
    pages: Vec<DocumentPage>,
    index: HashMap<String, usize>,
}

impl PageRegistry {
    /// Parse the documents embedded in the binary.
    pub fn builtin() -> Result<Self, PageError> {
        Self::from_sources(BUILTIN_PAGES.iter().copied())
    }

    /// Build a registry from `(route, markdown)` pairs.
    ///
    /// Each route must look like `/docs/<slug>`, be unique and its document
    /// must start with a level-one heading.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, PageError> {
        let mut pages = Vec::new();
        let mut index = HashMap::new();

        for (route, markdown) in sources {
            let slug = route.strip_prefix(DOCS_PREFIX).unwrap_or_default();
            if slug.is_empty() || slug.contains('/') {
                return Err(PageError::InvalidRoute(route.to_owned()));
            }
            if index.contains_key(route) {
                return Err(PageError::DuplicateRoute(route.to_owned()));
            }
            let doc = parse_markdown(markdown);
            let title = doc
                .title
                .filter(|t| !t.is_empty())
                .ok_or_else(|| PageError::MissingTitle(route.to_owned()))?;

            index.insert(route.to_owned(), pages.len());
            pages.push(DocumentPage {
                route: route.to_owned(),
                title,
                body: doc.body,
            });
        }

        tracing::debug!(pages = pages.len(), "Loaded documentation pages");
        Ok(Self { pages, index })
    }

    /// Resolve a route to the view that should be shown.
    #[must_use]
    pub fn resolve(&self, route: &str) -> Resolution<'_> {
        if route == HOME_ROUTE {
            return Resolution::Home;
        }
        self.get(route).map_or(Resolution::NotFound, Resolution::Page)
    }

    /// Look up a page by exact route.
    #[must_use]
    pub fn get(&self, route: &str) -> Option<&DocumentPage> {
        self.index.get(route).map(|&i| &self.pages[i])
    }

    /// Look up a page by slug (route without `/docs/`).
    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<&DocumentPage> {
        self.get(&format!("{DOCS_PREFIX}{slug}"))
    }

    /// Whether a documentation page is registered under `route`.
    #[must_use]
    pub fn contains(&self, route: &str) -> bool {
        self.index.contains_key(route)
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.route.as_str())
    }

    /// Pages in registration order.
    #[must_use]
    pub fn pages(&self) -> &[DocumentPage] {
        &self.pages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
