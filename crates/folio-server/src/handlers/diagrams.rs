//! Diagram rendering endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use folio_diagrams::{DiagramError, DiagramLanguage, DiagramState, DiagramViewer};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct DiagramQuery {
    #[serde(default = "default_language")]
    language: String,
}

fn default_language() -> String {
    "mermaid".to_owned()
}

/// Either the SVG or the message to show in its place.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum DiagramResponse {
    Svg { svg: String },
    Error { error: String },
}

impl From<DiagramState> for DiagramResponse {
    fn from(state: DiagramState) -> Self {
        match state {
            DiagramState::Rendered(svg) => Self::Svg { svg },
            DiagramState::Failed(error) => Self::Error { error },
            DiagramState::Empty | DiagramState::Pending { .. } => Self::Error {
                error: "diagram was not rendered".to_owned(),
            },
        }
    }
}

/// Handle POST /api/diagrams.
///
/// Always answers 200: render failures are shown inline by the client.
pub(crate) async fn render_diagram(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DiagramQuery>,
    body: String,
) -> Json<DiagramResponse> {
    let Some(language) = DiagramLanguage::parse(&query.language) else {
        return Json(DiagramResponse::Error {
            error: DiagramError::UnsupportedLanguage(query.language).to_string(),
        });
    };
    let viewer = DiagramViewer::new(state.site.diagram_renderer(), language);
    Json(viewer.render(body).await.into())
}
