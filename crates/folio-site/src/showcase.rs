//! Project showcase view state.

use folio_content::{ContentError, ContentRegistry, Project, ProjectFilter};

/// Transient state of the project showcase: active filter and hovered card.
///
/// Starts with [`ProjectFilter::All`] and no hovered card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectShowcase {
    filter: ProjectFilter,
    hovered: Option<String>,
}

impl ProjectShowcase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    /// Switch to the filter named by `value`.
    ///
    /// An unrecognized value is rejected and the previous filter stays
    /// active.
    pub fn select_filter(&mut self, value: &str) -> Result<ProjectFilter, ContentError> {
        let filter = ProjectFilter::parse(value)?;
        self.filter = filter;
        Ok(filter)
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
    }

    /// Pointer entered a card. Replaces any previously hovered card.
    pub fn hover(&mut self, id: &str) {
        self.hovered = Some(id.to_owned());
    }

    /// Pointer left a card. Ignored unless that card is the hovered one.
    pub fn unhover(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    #[must_use]
    pub fn is_hovered(&self, project: &Project) -> bool {
        self.hovered.as_deref() == Some(project.id.as_str())
    }

    /// Projects passing the active filter, in catalog order.
    #[must_use]
    pub fn visible_projects<'a>(&self, registry: &'a ContentRegistry) -> Vec<&'a Project> {
        registry.projects(self.filter).collect()
    }

    /// Long description for the hovered card, short description otherwise.
    #[must_use]
    pub fn displayed_description<'a>(&self, project: &'a Project) -> &'a str {
        if self.is_hovered(project) {
            &project.long_description
        } else {
            &project.description
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_content::ProjectCategory;
    use pretty_assertions::assert_eq;

    use super::*;

    fn registry() -> ContentRegistry {
        ContentRegistry::builtin().unwrap()
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_initial_state() {
        let showcase = ProjectShowcase::new();
        assert_eq!(showcase.filter(), ProjectFilter::All);
        assert_eq!(showcase.hovered(), None);
    }

    #[test]
    fn test_all_returns_catalog_order() {
        let registry = registry();
        let showcase = ProjectShowcase::new();
        assert_eq!(
            ids(&showcase.visible_projects(&registry)),
            ["awsutil", "py-awsutil", "promptheus"]
        );
    }

    #[test]
    fn test_infrastructure_filter_is_exact() {
        let registry = registry();
        let mut showcase = ProjectShowcase::new();
        showcase.select_filter("infrastructure").unwrap();

        let visible = showcase.visible_projects(&registry);
        let expected: Vec<_> = registry
            .list_projects(None)
            .unwrap()
            .into_iter()
            .filter(|p| p.category == ProjectCategory::Infrastructure)
            .collect();
        assert_eq!(visible, expected);
        assert_eq!(ids(&visible), ["awsutil"]);
    }

    #[test]
    fn test_invalid_filter_keeps_previous() {
        let mut showcase = ProjectShowcase::new();
        showcase.select_filter("ai").unwrap();

        let err = showcase.select_filter("robotics").unwrap_err();

        assert!(matches!(err, ContentError::InvalidFilter(_)));
        assert_eq!(showcase.filter().as_str(), "ai");
    }

    #[test]
    fn test_hover_swaps_only_that_card() {
        let registry = registry();
        let mut showcase = ProjectShowcase::new();
        let projects = showcase.visible_projects(&registry);

        showcase.hover("py-awsutil");

        for project in &projects {
            let shown = showcase.displayed_description(project);
            if project.id == "py-awsutil" {
                assert_eq!(shown, project.long_description);
            } else {
                assert_eq!(shown, project.description);
            }
        }

        showcase.unhover("py-awsutil");
        for project in &projects {
            assert_eq!(showcase.displayed_description(project), project.description);
        }
    }

    #[test]
    fn test_unhover_of_other_card_is_ignored() {
        let mut showcase = ProjectShowcase::new();
        showcase.hover("awsutil");
        showcase.unhover("promptheus");
        assert_eq!(showcase.hovered(), Some("awsutil"));
    }

    #[test]
    fn test_hover_moves_between_cards() {
        let mut showcase = ProjectShowcase::new();
        showcase.hover("awsutil");
        showcase.hover("promptheus");
        assert_eq!(showcase.hovered(), Some("promptheus"));
    }
}
