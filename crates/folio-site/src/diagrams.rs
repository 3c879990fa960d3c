//! Diagram code blocks inside documentation pages.

use std::sync::Arc;

use folio_diagrams::{
    DiagramError, DiagramLanguage, DiagramRenderer, DiagramState, DiagramViewer, Viewport,
    embed_html,
};
use folio_renderer::{CodeBlockProcessor, ExtractedCodeBlock, ProcessResult};

/// Replaces diagram fences with placeholders and records their sources.
#[derive(Default)]
pub(crate) struct DiagramProcessor {
    extracted: Vec<ExtractedCodeBlock>,
}

impl CodeBlockProcessor for DiagramProcessor {
    fn process(&mut self, language: &str, source: &str, index: usize) -> ProcessResult {
        if DiagramLanguage::parse(language).is_none() {
            return ProcessResult::PassThrough;
        }
        self.extracted.push(ExtractedCodeBlock {
            index,
            language: language.to_owned(),
            source: source.to_owned(),
        });
        ProcessResult::Placeholder(placeholder(index))
    }

    fn extracted(&self) -> &[ExtractedCodeBlock] {
        &self.extracted
    }
}

/// Marker left in the page body for diagram `index`.
///
/// Page text is always escaped, so no document content can produce it.
pub(crate) fn placeholder(index: usize) -> String {
    format!("<!--diagram:{index}-->")
}

/// Render one extracted block through a fresh viewer.
pub(crate) async fn render_async(
    renderer: &Arc<dyn DiagramRenderer>,
    block: &ExtractedCodeBlock,
) -> DiagramState {
    match DiagramLanguage::parse(&block.language) {
        Some(language) => {
            DiagramViewer::new(Arc::clone(renderer), language)
                .render(block.source.as_str())
                .await
        }
        None => unsupported(&block.language),
    }
}

/// Render one extracted block on the calling thread.
pub(crate) fn render_blocking(
    renderer: &dyn DiagramRenderer,
    block: &ExtractedCodeBlock,
) -> DiagramState {
    let Some(language) = DiagramLanguage::parse(&block.language) else {
        return unsupported(&block.language);
    };
    match renderer.render(language, &block.source) {
        Ok(svg) => DiagramState::Rendered(svg),
        Err(e) => {
            tracing::warn!(error = %e, index = block.index, "Diagram render failed");
            DiagramState::Failed(e.to_string())
        }
    }
}

/// Swap the placeholder of `index` for the viewer markup.
pub(crate) fn substitute(html: &mut String, index: usize, state: &DiagramState) {
    let embedded = embed_html(state, &Viewport::new());
    *html = html.replace(&placeholder(index), &embedded);
}

fn unsupported(language: &str) -> DiagramState {
    DiagramState::Failed(DiagramError::UnsupportedLanguage(language.to_owned()).to_string())
}
