//! Asynchronous diagram viewer state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{DiagramLanguage, DiagramRenderer};

/// What the viewer currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DiagramState {
    /// Nothing requested yet.
    #[default]
    Empty,
    /// A render is in flight; the previous SVG (if any) stays visible.
    Pending { previous: Option<String> },
    Rendered(String),
    /// The render failed; the message is shown in place of the diagram.
    Failed(String),
}

impl DiagramState {
    /// SVG that should be visible right now.
    #[must_use]
    pub fn visible_svg(&self) -> Option<&str> {
        match self {
            Self::Rendered(svg) | Self::Pending { previous: Some(svg) } => Some(svg),
            Self::Empty | Self::Pending { previous: None } | Self::Failed(_) => None,
        }
    }
}

struct Shared {
    generation: u64,
    state: DiagramState,
}

/// One diagram widget instance.
///
/// [`render`](Self::render) runs the renderer on the blocking pool. Rendering
/// failures never escape: they become [`DiagramState::Failed`]. When renders
/// overlap, the most recently requested one wins and older completions are
/// discarded.
#[derive(Clone)]
pub struct DiagramViewer {
    renderer: Arc<dyn DiagramRenderer>,
    language: DiagramLanguage,
    shared: Arc<Mutex<Shared>>,
}

impl DiagramViewer {
    pub fn new(renderer: Arc<dyn DiagramRenderer>, language: DiagramLanguage) -> Self {
        Self {
            renderer,
            language,
            shared: Arc::new(Mutex::new(Shared {
                generation: 0,
                state: DiagramState::Empty,
            })),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> DiagramState {
        self.lock().state.clone()
    }

    /// Render a description and return the state after completion.
    pub async fn render(&self, description: impl Into<String>) -> DiagramState {
        let source = description.into();
        let generation = {
            let mut shared = self.lock();
            shared.generation += 1;
            let previous = shared.state.visible_svg().map(str::to_owned);
            shared.state = DiagramState::Pending { previous };
            shared.generation
        };

        let renderer = Arc::clone(&self.renderer);
        let language = self.language;
        let outcome =
            tokio::task::spawn_blocking(move || renderer.render(language, &source)).await;

        let next = match outcome {
            Ok(Ok(svg)) => DiagramState::Rendered(svg),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Diagram render failed");
                DiagramState::Failed(e.to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Diagram render task failed");
                DiagramState::Failed(e.to_string())
            }
        };

        let mut shared = self.lock();
        if shared.generation == generation {
            shared.state = next;
        } else {
            tracing::debug!(generation, latest = shared.generation, "Discarded stale diagram");
        }
        shared.state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
