//! Application state.

use std::sync::Arc;

use folio_site::Site;

/// State shared by all request handlers.
pub(crate) struct AppState {
    pub(crate) site: Arc<Site>,
    /// Application version, mixed into `ETag`s.
    pub(crate) version: String,
}
