//! Project showcase filter.

use std::fmt;

use crate::{ContentError, Project, ProjectCategory};

/// Active filter of the project showcase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    /// Show every project.
    #[default]
    All,
    /// Show only projects of one category.
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Every filter value in tab order, starting with [`ProjectFilter::All`].
    pub const TABS: [Self; 4] = [
        Self::All,
        Self::Category(ProjectCategory::Infrastructure),
        Self::Category(ProjectCategory::Development),
        Self::Category(ProjectCategory::Ai),
    ];

    /// Parse a filter value (`all`, `infrastructure`, `development`, `ai`).
    ///
    /// Values are matched exactly. Anything else is rejected with
    /// [`ContentError::InvalidFilter`] instead of silently matching all or none.
    pub fn parse(value: &str) -> Result<Self, ContentError> {
        if value == "all" {
            return Ok(Self::All);
        }
        value.parse().map(Self::Category)
    }

    /// Machine name used in query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(category) => category.as_str(),
        }
    }

    /// Tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Category(category) => category.label(),
        }
    }

    /// Whether a project passes this filter.
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.category == category,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        assert_eq!(ProjectFilter::parse("all").unwrap(), ProjectFilter::All);
    }

    #[test]
    fn test_parse_categories() {
        assert_eq!(
            ProjectFilter::parse("infrastructure").unwrap(),
            ProjectFilter::Category(ProjectCategory::Infrastructure)
        );
        assert_eq!(
            ProjectFilter::parse("ai").unwrap(),
            ProjectFilter::Category(ProjectCategory::Ai)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert!(ProjectFilter::parse("").is_err());
        assert!(ProjectFilter::parse("All").is_err());
        assert!(ProjectFilter::parse("web").is_err());
    }

    #[test]
    fn test_tabs_start_with_all() {
        assert_eq!(ProjectFilter::TABS[0], ProjectFilter::All);
        assert_eq!(ProjectFilter::default(), ProjectFilter::All);
        let names: Vec<_> = ProjectFilter::TABS.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["all", "infrastructure", "development", "ai"]);
    }
}
