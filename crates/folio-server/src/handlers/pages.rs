//! Pages API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use folio_renderer::TocEntry;
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::{compute_etag, is_not_modified};
use crate::state::AppState;

/// Response for GET /api/pages/{slug}.
#[derive(Serialize)]
struct PageResponse {
    route: String,
    title: String,
    toc: Vec<TocEntry>,
    /// Rendered body HTML, diagrams included.
    content: String,
}

/// Handle GET /api/pages/{slug}.
pub(crate) async fn get_page(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let page = state
        .site
        .pages()
        .get_by_slug(&slug)
        .ok_or_else(|| ServerError::PageNotFound(slug.clone()))?;

    let doc = state.site.render_document(page).await;

    let etag = compute_etag(&state.version, &doc.html);
    if is_not_modified(&headers, &etag) {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let response = PageResponse {
        route: doc.route,
        title: doc.title,
        toc: doc.toc,
        content: doc.html,
    };

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(response),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_serialization() {
        let response = PageResponse {
            route: "/docs/kafka-cli".to_owned(),
            title: "Kafka CLI Tools".to_owned(),
            toc: vec![TocEntry {
                level: 2,
                title: "Topics".to_owned(),
                id: "topics".to_owned(),
            }],
            content: "<p>x</p>".to_owned(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["route"], "/docs/kafka-cli");
        assert_eq!(json["toc"][0]["id"], "topics");
        assert_eq!(json["toc"][0]["level"], 2);
        assert_eq!(json["content"], "<p>x</p>");
    }
}
