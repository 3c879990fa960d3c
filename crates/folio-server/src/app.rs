//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/resources", get(handlers::content::get_resources))
        .route("/api/projects", get(handlers::content::get_projects))
        .route("/api/pages/{slug}", get(handlers::pages::get_page))
        .route("/api/diagrams", post(handlers::diagrams::render_diagram))
        .route("/api/background", get(handlers::background::stream_background));

    let site_routes = Router::new()
        .route("/", get(handlers::site::home))
        .route("/docs/{slug}", get(handlers::site::document))
        .route("/assets/{file}", get(handlers::site::asset))
        .fallback(handlers::site::fallback);

    let router = Router::new()
        .merge(api_routes)
        .merge(site_routes)
        .layer(TraceLayer::new_for_http());

    security::with_security_headers(router).with_state(state)
}
