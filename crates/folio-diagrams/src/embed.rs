//! Inline markup of the diagram viewer.

use std::fmt::Write;

use folio_renderer::escape_html;

use crate::viewport::{MAX_SCALE, MIN_SCALE, WHEEL_STEP};
use crate::{DiagramState, Viewport};

/// Interaction hint shown above every rendered diagram.
pub const HINT: &str = "Scroll to zoom • Drag to pan • Double-click to reset";

const ZOOM_IN_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><circle cx="11" cy="11" r="8"/><path d="M21 21l-4.35-4.35M11 8v6M8 11h6"/></svg>"#;
const ZOOM_OUT_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><circle cx="11" cy="11" r="8"/><path d="M21 21l-4.35-4.35M8 11h6"/></svg>"#;
const RESET_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/></svg>"#;

/// Render the viewer for its current state.
///
/// Rendered (or still visible while pending) SVG is placed inside a pan/zoom
/// container with zoom controls. Failures become an inline error message.
#[must_use]
pub fn embed_html(state: &DiagramState, viewport: &Viewport) -> String {
    let mut out = String::with_capacity(512);

    if let DiagramState::Failed(message) = state {
        let _ = write!(
            out,
            r#"<div class="diagram-container"><pre class="diagram-error">Error rendering diagram: {}</pre></div>"#,
            escape_html(message)
        );
        return out;
    }

    let pending = matches!(state, DiagramState::Pending { .. });
    let _ = write!(
        out,
        r#"<div class="diagram-container" data-state="{}">"#,
        if pending { "pending" } else { "ready" }
    );

    if let Some(svg) = state.visible_svg() {
        let _ = write!(
            out,
            r#"<div class="diagram-controls"><span class="diagram-hint">{HINT}</span></div><div class="diagram-zoom-controls"><button type="button" class="diagram-zoom-btn" data-action="zoom-in" title="Zoom in">{ZOOM_IN_ICON}</button><button type="button" class="diagram-zoom-btn" data-action="zoom-out" title="Zoom out">{ZOOM_OUT_ICON}</button><button type="button" class="diagram-zoom-btn" data-action="reset" title="Reset zoom">{RESET_ICON}</button></div>"#
        );
        let _ = write!(
            out,
            r#"<div class="diagram-viewport" data-min-scale="{MIN_SCALE}" data-max-scale="{MAX_SCALE}" data-wheel-step="{WHEEL_STEP}"><div class="diagram-content" style="transform: {}">{svg}</div></div>"#,
            viewport.css_transform()
        );
    }

    out.push_str("</div>");
    out
}
