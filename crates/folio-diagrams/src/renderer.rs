//! Diagram renderer backends.

use std::time::Duration;

use ureq::Agent;

use crate::{DiagramError, DiagramLanguage};

/// Default Kroki request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Turns a diagram description into SVG.
///
/// Implementations block; the viewer runs them on tokio's blocking pool.
pub trait DiagramRenderer: Send + Sync {
    fn render(&self, language: DiagramLanguage, source: &str) -> Result<String, DiagramError>;
}

/// Renders diagrams by POSTing them to a Kroki server.
pub struct KrokiRenderer {
    agent: Agent,
    server_url: String,
}

impl KrokiRenderer {
    /// Create a renderer for `server_url` (trailing slashes are ignored).
    #[must_use]
    pub fn new(server_url: &str, timeout: Duration) -> Self {
        Self {
            agent: create_agent(timeout),
            server_url: server_url.trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

impl DiagramRenderer for KrokiRenderer {
    fn render(&self, language: DiagramLanguage, source: &str) -> Result<String, DiagramError> {
        let url = format!("{}/{}/svg", self.server_url, language.kroki_endpoint());

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "text/plain")
            .send(source.as_bytes())
            .map_err(|e| DiagramError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(DiagramError::Http(format!("HTTP {status}: {}", error_body.trim())));
        }

        let svg = body
            .read_to_string()
            .map_err(|e| DiagramError::Io(e.to_string()))?;
        if !svg.contains("<svg") {
            return Err(DiagramError::InvalidSvg);
        }
        Ok(svg)
    }
}

/// Renderer used when no Kroki server is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRenderer;

impl DiagramRenderer for DisabledRenderer {
    fn render(&self, _language: DiagramLanguage, _source: &str) -> Result<String, DiagramError> {
        Err(DiagramError::Disabled)
    }
}

/// Create an HTTP agent with the given timeout.
///
/// Non-2xx statuses are returned as responses so error bodies can be read.
pub fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}
