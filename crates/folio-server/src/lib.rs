//! HTTP server for the folio portfolio site.
//!
//! Serves the rendered site and a small JSON API over axum:
//!
//! - `/`, `/docs/{slug}`: HTML pages (documentation pages carry `ETag`s)
//! - `/api/resources`, `/api/projects`, `/api/pages/{slug}`: catalog and pages
//! - `/api/diagrams`: diagram rendering for the inline viewer
//! - `/api/background`: server-sent events with background frames
//!
//! Every other path gets the not-found page with status 404.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use folio_config::SiteConfig;
//! use folio_server::{ServerConfig, run_server};
//! use folio_site::Site;
//!
//! #[tokio::main]
//! async fn main() {
//!     let site = Arc::new(Site::builtin(SiteConfig::default()).unwrap());
//!     run_server(ServerConfig::default(), site).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use axum::Router;
use folio_site::Site;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Application version (for `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            version: String::new(),
        }
    }
}

impl ServerConfig {
    /// Server configuration from `folio.toml` settings.
    #[must_use]
    pub fn from_config(config: &folio_config::Config, version: String) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            version,
        }
    }
}

/// Build the router without binding a socket.
pub fn router(site: Arc<Site>, version: impl Into<String>) -> Router {
    app::create_router(Arc::new(AppState {
        site,
        version: version.into(),
    }))
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or serving fails.
pub async fn run_server(config: ServerConfig, site: Arc<Site>) -> std::io::Result<()> {
    let app = router(site, config.version);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use folio_config::SiteConfig;
    use folio_diagrams::{DiagramError, DiagramLanguage, DiagramRenderer};
    use folio_site::{FixedClock, Site};
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;
    use tokio_stream::StreamExt;
    use tower::ServiceExt;

    use super::*;

    assert_impl_all!(ServerError: Send, Sync);

    struct StubRenderer;

    impl DiagramRenderer for StubRenderer {
        fn render(&self, _: DiagramLanguage, source: &str) -> Result<String, DiagramError> {
            if source.starts_with("graph") {
                Ok("<svg>ok</svg>".to_owned())
            } else {
                Err(DiagramError::Http("400 Bad Request".to_owned()))
            }
        }
    }

    fn app() -> Router {
        let site = Site::builtin(SiteConfig::default())
            .unwrap()
            .with_clock(Arc::new(FixedClock::new(2025)))
            .with_diagram_renderer(Arc::new(StubRenderer));
        router(Arc::new(site), "test")
    }

    async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn send(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, headers, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Featured Projects"));
        assert!(body.contains("© 2025 Abhishek Chandra"));
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
        assert!(headers.contains_key("content-security-policy"));
    }

    #[tokio::test]
    async fn test_home_filter() {
        let (_, _, body) = get("/?filter=ai").await;
        assert!(body.contains(r#"data-project-id="promptheus" data-category="ai" tabindex="0">"#));
        assert!(body.contains(r#"data-project-id="awsutil" data-category="infrastructure" tabindex="0" hidden>"#));
        assert!(body.contains(r#"<a class="filter-tab active" href="/?filter=ai#projects""#));
    }

    #[tokio::test]
    async fn test_home_invalid_filter_falls_back_to_all() {
        let (status, _, body) = get("/?filter=robots").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<article class=\"project-card\"").count(), 3);
        assert!(!body.contains(r#"tabindex="0" hidden>"#));
    }

    #[tokio::test]
    async fn test_document_page_and_etag() {
        let (status, headers, body) = get("/docs/kafka-cli").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1 class=\"doc-title\">Kafka CLI Tools</h1>"));

        let etag = headers[header::ETAG].to_str().unwrap().to_owned();
        let request = Request::get("/docs/kafka-cli")
            .header(header::IF_NONE_MATCH, etag)
            .body(Body::empty())
            .unwrap();
        let (status, _, _) = send(request).await;
        assert_eq!(status, StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_scroll_reset_only_on_route_change() {
        let from = |referer: &str| {
            Request::get("/docs/kafka-cli")
                .header(header::HOST, "localhost:8080")
                .header(header::REFERER, referer)
                .body(Body::empty())
                .unwrap()
        };

        let (_, headers, body) = send(from("http://localhost:8080/")).await;
        assert!(body.contains("<body data-scroll-reset>"));
        assert_eq!(headers[header::VARY], "Referer");

        let (_, _, body) = send(from("http://localhost:8080/docs/kafka-cli#install")).await;
        assert!(!body.contains("data-scroll-reset"));

        let (_, _, body) = get("/docs/kafka-cli").await;
        assert!(body.contains("<body data-scroll-reset>"));
    }

    #[tokio::test]
    async fn test_unknown_routes_render_not_found() {
        for uri in ["/docs/missing", "/about", "/assets/missing.css"] {
            let (status, _, body) = get(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(body.contains("Page not found"), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_stylesheet() {
        let (status, headers, body) = get("/assets/site.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/css"));
        assert!(body.contains(".project-card"));
    }

    #[tokio::test]
    async fn test_api_resources() {
        let (status, _, body) = get("/api/resources").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json[0]["title"], "KEDA & Autoscaling");
        assert_eq!(json[0]["icon"], "⚡");
    }

    #[tokio::test]
    async fn test_api_projects() {
        let (_, _, body) = get("/api/projects?category=infrastructure").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["id"], "awsutil");

        let (status, _, body) = get("/api/projects?category=mobile").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("error"));
    }

    #[tokio::test]
    async fn test_api_page() {
        let (status, _, body) = get("/api/pages/iam-roles-anywhere-setup").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["route"], "/docs/iam-roles-anywhere-setup");
        assert!(json["content"].as_str().unwrap().contains("diagram-container"));

        let (status, _, _) = get("/api/pages/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_diagrams() {
        let post = |body: &'static str, language: &str| {
            Request::post(format!("/api/diagrams?language={language}"))
                .body(Body::from(body))
                .unwrap()
        };

        let (status, _, body) = send(post("graph TD; A-->B", "mermaid")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"svg":"<svg>ok</svg>"}"#);

        let (status, _, body) = send(post("nonsense", "mermaid")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("400 Bad Request"));

        let (_, _, body) = send(post("graph", "ascii")).await;
        assert!(body.contains("unsupported diagram language: ascii"));
    }

    #[tokio::test]
    async fn test_background_stream_sends_frames() {
        let response = app()
            .oneshot(
                Request::get("/api/background?width=300&height=200")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");

        let mut stream = response.into_body().into_data_stream();
        let chunk = stream.next().await.unwrap().unwrap();
        let text = String::from_utf8(chunk.to_vec()).unwrap();
        assert!(text.starts_with("event: frame\ndata: <svg"));
    }

    #[tokio::test]
    async fn test_background_stream_survives_infinite_viewport() {
        let response = app()
            .oneshot(
                Request::get("/api/background?width=inf&height=200")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let mut stream = response.into_body().into_data_stream();
        let chunk = stream.next().await.unwrap().unwrap();
        let text = String::from_utf8(chunk.to_vec()).unwrap();
        assert!(text.contains(r#"viewBox="0 0 0 200""#), "{text}");
    }
}
