//! Page registry error types.

/// Error returned while building a [`PageRegistry`](crate::PageRegistry).
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Two documents were registered under the same route.
    #[error("Duplicate page route: {0}")]
    DuplicateRoute(String),

    /// Document has no level-one heading to use as its title.
    #[error("Page {0} has no title heading")]
    MissingTitle(String),

    /// Route is not of the form `/docs/<slug>`.
    #[error("Invalid page route: {0:?}")]
    InvalidRoute(String),
}
