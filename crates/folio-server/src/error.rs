//! Error types for the HTTP server.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_content::ContentError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No documentation page has the given slug.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Error from the content catalog (invalid filter values).
    #[error(transparent)]
    Content(#[from] ContentError),
}

impl ServerError {
    /// Status code reported to the client.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::PageNotFound(_) => StatusCode::NOT_FOUND,
            Self::Content(ContentError::InvalidFilter(_)) => StatusCode::BAD_REQUEST,
            Self::Content(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = match &self {
            Self::PageNotFound(slug) => json!({"error": "Page not found", "slug": slug}),
            Self::Content(e) => json!({"error": e.to_string()}),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServerError::PageNotFound("x".to_owned()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::Content(ContentError::InvalidFilter("mobile".to_owned())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::Content(ContentError::DuplicateProject("a".to_owned())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
