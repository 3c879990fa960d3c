//! The content registry.

use std::collections::HashSet;

use serde::Deserialize;

use crate::model::is_external_url;
use crate::{ContentError, Project, ProjectFilter, ResourceCategory};

/// Catalog embedded at compile time.
const BUILTIN_CATALOG: &str = include_str!("../catalog.yaml");

/// Immutable catalog of resource categories and projects.
///
/// Constructed once and read for the lifetime of the process. There is no
/// mutation API; share it behind an `Arc`.
#[derive(Debug, Deserialize)]
pub struct ContentRegistry {
    categories: Vec<ResourceCategory>,
    #[serde(default)]
    projects: Vec<Project>,
}

impl ContentRegistry {
    /// Load the catalog embedded in the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse a catalog from YAML.
    ///
    /// Project ids are checked for uniqueness here. Resource links are checked
    /// separately by [`validate_links`](Self::validate_links) because that
    /// needs the set of known routes.
    pub fn from_yaml(yaml: &str) -> Result<Self, ContentError> {
        let registry: Self = serde_yaml::from_str(yaml)?;
        registry.validate_projects()?;
        tracing::debug!(
            categories = registry.categories.len(),
            projects = registry.projects.len(),
            "Loaded content catalog"
        );
        Ok(registry)
    }

    /// All resource categories in display order.
    ///
    /// Repeated calls return the same slice in the same order.
    #[must_use]
    pub fn list_categories(&self) -> &[ResourceCategory] {
        &self.categories
    }

    /// Projects matching a raw filter value, in catalog order.
    ///
    /// `None` and `"all"` return every project. Unrecognized values fail with
    /// [`ContentError::InvalidFilter`].
    pub fn list_projects(&self, filter: Option<&str>) -> Result<Vec<&Project>, ContentError> {
        let filter = filter.map_or(Ok(ProjectFilter::All), ProjectFilter::parse)?;
        Ok(self.projects(filter).collect())
    }

    /// Projects matching a typed filter, in catalog order.
    pub fn projects(&self, filter: ProjectFilter) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| filter.matches(p))
    }

    /// Look up a project by id.
    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Check that every resource link is external or names a known route.
    ///
    /// # Arguments
    ///
    /// * `is_known_route` - Returns true for routes served by the site
    pub fn validate_links(&self, is_known_route: impl Fn(&str) -> bool) -> Result<(), ContentError> {
        for entry in self.categories.iter().flat_map(|c| &c.entries) {
            if !is_external_url(&entry.url) && !is_known_route(&entry.url) {
                return Err(ContentError::DanglingLink {
                    title: entry.title.clone(),
                    url: entry.url.clone(),
                });
            }
        }
        Ok(())
    }

    /// Internal routes referenced by resource entries, in display order.
    pub fn internal_links(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| &c.entries)
            .filter(|e| !e.is_external())
            .map(|e| e.url.as_str())
    }

    fn validate_projects(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProject(project.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::ProjectCategory;

    assert_impl_all!(ContentRegistry: Send, Sync);

    const SMALL_CATALOG: &str = r#"
categories:
  - title: "Guides"
    entries:
      - title: "Local"
        url: "/docs/local"
        description: "internal"
      - title: "Remote"
        url: "https://example.com"
        description: "external"
projects:
  - id: a
    title: A
    description: a
    long_description: a long
    repository_url: "https://github.com/x/a"
    category: infrastructure
  - id: b
    title: B
    description: b
    long_description: b long
    repository_url: "https://github.com/x/b"
    category: ai
  - id: c
    title: C
    description: c
    long_description: c long
    repository_url: "https://github.com/x/c"
    category: infrastructure
"#;

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let registry = ContentRegistry::builtin().unwrap();
        assert!(!registry.list_categories().is_empty());
        assert_eq!(registry.list_projects(None).unwrap().len(), 3);
    }

    #[test]
    fn test_builtin_category_order() {
        let registry = ContentRegistry::builtin().unwrap();
        let titles: Vec<_> = registry
            .list_categories()
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(
            titles,
            [
                "KEDA & Autoscaling",
                "Kubernetes Operations",
                "Infrastructure Monitoring",
                "Kafka Integration",
                "Cloud Identity",
                "Scripts & Tools",
            ]
        );
    }

    #[test]
    fn test_list_categories_is_deterministic() {
        let registry = ContentRegistry::builtin().unwrap();
        let first = registry.list_categories().to_vec();
        for _ in 0..3 {
            assert_eq!(registry.list_categories(), first.as_slice());
        }
    }

    #[test]
    fn test_list_projects_without_filter_returns_catalog_order() {
        let registry = ContentRegistry::from_yaml(SMALL_CATALOG).unwrap();
        assert_eq!(ids(&registry.list_projects(None).unwrap()), ["a", "b", "c"]);
        assert_eq!(
            ids(&registry.list_projects(Some("all")).unwrap()),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn test_list_projects_filters_exact_category_in_order() {
        let registry = ContentRegistry::from_yaml(SMALL_CATALOG).unwrap();
        let infra = registry.list_projects(Some("infrastructure")).unwrap();
        assert_eq!(ids(&infra), ["a", "c"]);
        assert!(
            infra
                .iter()
                .all(|p| p.category == ProjectCategory::Infrastructure)
        );
        assert!(registry.list_projects(Some("development")).unwrap().is_empty());
    }

    #[test]
    fn test_list_projects_rejects_invalid_filter() {
        let registry = ContentRegistry::from_yaml(SMALL_CATALOG).unwrap();
        let err = registry.list_projects(Some("mobile")).unwrap_err();
        assert!(matches!(err, ContentError::InvalidFilter(_)));
    }

    #[test]
    fn test_duplicate_project_ids_rejected() {
        let yaml = r#"
categories: []
projects:
  - id: same
    title: One
    description: d
    long_description: l
    repository_url: "https://github.com/x/1"
    category: ai
  - id: same
    title: Two
    description: d
    long_description: l
    repository_url: "https://github.com/x/2"
    category: development
"#;
        let err = ContentRegistry::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateProject(ref id) if id == "same"));
    }

    #[test]
    fn test_parse_error_reported() {
        let err = ContentRegistry::from_yaml("categories: [").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_validate_links_accepts_known_routes() {
        let registry = ContentRegistry::from_yaml(SMALL_CATALOG).unwrap();
        assert!(registry.validate_links(|r| r == "/docs/local").is_ok());
    }

    #[test]
    fn test_validate_links_rejects_dangling_route() {
        let registry = ContentRegistry::from_yaml(SMALL_CATALOG).unwrap();
        let err = registry.validate_links(|_| false).unwrap_err();
        match err {
            ContentError::DanglingLink { title, url } => {
                assert_eq!(title, "Local");
                assert_eq!(url, "/docs/local");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_internal_links_skip_external() {
        let registry = ContentRegistry::from_yaml(SMALL_CATALOG).unwrap();
        let links: Vec<_> = registry.internal_links().collect();
        assert_eq!(links, ["/docs/local"]);
    }

    #[test]
    fn test_project_lookup() {
        let registry = ContentRegistry::builtin().unwrap();
        assert_eq!(registry.project("promptheus").unwrap().title, "Promptheus");
        assert!(registry.project("missing").is_none());
    }
}
