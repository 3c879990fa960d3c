//! Site construction errors.

use folio_content::ContentError;
use folio_pages::PageError;

/// Error returned while assembling a [`Site`](crate::Site).
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Pages(#[from] PageError),
}
