//! HTML pages: home, documentation, assets and the not-found fallback.
//!
//! Every page goes through [`Site::render_route`](folio_site::Site::render_route)
//! with a navigator started at the referring page, so only a change of route
//! asks the browser to scroll back to the top.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use folio_site::{Navigator, ProjectShowcase, RoutedPage};
use serde::Deserialize;

use crate::handlers::{compute_etag, is_not_modified};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HomeQuery {
    filter: Option<String>,
}

/// Handle GET /.
///
/// An unrecognized filter is logged and the default filter is kept.
pub(crate) async fn home(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HomeQuery>,
    headers: HeaderMap,
) -> Response {
    let mut showcase = ProjectShowcase::new();
    if let Some(filter) = query.filter.as_deref()
        && let Err(e) = showcase.select_filter(filter)
    {
        tracing::warn!(filter, error = %e, "Ignoring project filter");
    }
    let page = state
        .site
        .render_route(&mut navigator(&headers), "/", &showcase)
        .await;
    page_response(page)
}

/// Handle GET /docs/{slug}.
pub(crate) async fn document(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let route = format!("/docs/{slug}");
    let page = state
        .site
        .render_route(&mut navigator(&headers), &route, &ProjectShowcase::new())
        .await;
    let RoutedPage::Found(html) = page else {
        return page_response(page);
    };

    let etag = compute_etag(&state.version, &html);
    if is_not_modified(&headers, &etag) {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
            (header::VARY, "Referer".to_owned()),
        ],
        Html(html),
    )
        .into_response()
}

/// Handle GET /assets/{file}.
pub(crate) async fn asset(
    uri: Uri,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    match folio_site::assets::lookup(uri.path()) {
        Some((body, content_type)) => ([(header::CONTENT_TYPE, content_type)], body).into_response(),
        None => fallback(uri, State(state), headers).await,
    }
}

/// Fallback for every unmatched route.
pub(crate) async fn fallback(
    uri: Uri,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let page = state
        .site
        .render_route(&mut navigator(&headers), uri.path(), &ProjectShowcase::new())
        .await;
    page_response(page)
}

fn page_response(page: RoutedPage) -> Response {
    let status = if page.is_found() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (
        status,
        [(header::VARY, "Referer")],
        Html(page.into_html()),
    )
        .into_response()
}

/// Navigator positioned at the page the request came from.
fn navigator(headers: &HeaderMap) -> Navigator {
    previous_route(headers).map_or_else(Navigator::new, Navigator::at)
}

/// Route of a same-site `Referer`, if any.
fn previous_route(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(header::REFERER)?.to_str().ok()?;
    let host = headers.get(header::HOST)?.to_str().ok()?;
    let (_, rest) = referer.split_once("://")?;
    let (authority, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));
    if !authority.eq_ignore_ascii_case(host) {
        return None;
    }
    let path = path.split(['?', '#']).next().unwrap_or_default();
    Some(if path.is_empty() { "/" } else { path }.to_owned())
}
