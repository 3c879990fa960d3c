//! Content catalog error types.

/// Error returned by catalog loading, validation and filtering.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Filter value is not one of `all`, `infrastructure`, `development`, `ai`.
    #[error("Invalid project filter: {0:?}")]
    InvalidFilter(String),

    /// Catalog YAML could not be parsed.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A resource link points neither to an external URL nor to a known route.
    #[error("Resource {title:?} links to unknown route {url:?}")]
    DanglingLink {
        /// Title of the offending entry.
        title: String,
        /// The unresolved URL.
        url: String,
    },

    /// Two projects share the same id.
    #[error("Duplicate project id: {0}")]
    DuplicateProject(String),
}
