//! Catalog entities.
//!
//! All types are plain immutable data. They derive `Serialize` so the server
//! can expose them as JSON without intermediate response types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ContentError;

/// A single documentation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// Link text.
    pub title: String,
    /// Absolute external URL or documentation route (e.g. `/docs/kafka-cli`).
    pub url: String,
    /// One-line description shown under the link.
    pub description: String,
}

impl ResourceEntry {
    /// Whether the URL points outside the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        is_external_url(&self.url)
    }
}

/// A titled group of resource links. Entry order is display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCategory {
    /// Category heading.
    pub title: String,
    /// Links in display order.
    pub entries: Vec<ResourceEntry>,
}

/// Showcase category of a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Infrastructure,
    Development,
    Ai,
}

impl ProjectCategory {
    /// All categories in filter-tab order.
    pub const ALL: [Self; 3] = [Self::Infrastructure, Self::Development, Self::Ai];

    /// Machine name used in URLs and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Infrastructure => "infrastructure",
            Self::Development => "development",
            Self::Ai => "ai",
        }
    }

    /// Human-readable badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::Development => "Development",
            Self::Ai => "AI/ML",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ContentError::InvalidFilter(s.to_owned()))
    }
}

/// A portfolio showcase item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier within the catalog.
    pub id: String,
    pub title: String,
    /// Short description shown by default.
    pub description: String,
    /// Long description shown while the card is hovered or focused.
    pub long_description: String,
    /// Technology tags in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    pub repository_url: String,
    /// Optional live demo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub featured: bool,
}

/// Whether a URL is absolute and leaves the site.
pub(crate) fn is_external_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("mailto:")
}
