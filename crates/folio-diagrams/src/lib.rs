//! Diagram rendering and the pan/zoom diagram viewer.
//!
//! Diagrams are rendered to SVG by a [`DiagramRenderer`], normally
//! [`KrokiRenderer`]. The [`DiagramViewer`] wraps a renderer with the widget
//! contract: rendering is asynchronous, the previous diagram stays visible
//! while a render is pending, and failures are shown inline instead of being
//! returned. [`Viewport`] holds the pan/zoom transform and [`embed_html`]
//! produces the markup for a state.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use folio_diagrams::{DiagramLanguage, DiagramState, DiagramViewer, DisabledRenderer};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let viewer = DiagramViewer::new(Arc::new(DisabledRenderer), DiagramLanguage::Mermaid);
//! let state = viewer.render("graph TD; A-->B").await;
//! assert!(matches!(state, DiagramState::Failed(_)));
//! # });
//! ```

mod embed;
mod error;
mod language;
mod renderer;
mod viewer;
mod viewport;

pub use embed::{HINT, embed_html};
pub use error::DiagramError;
pub use language::DiagramLanguage;
pub use renderer::{DEFAULT_TIMEOUT, DiagramRenderer, DisabledRenderer, KrokiRenderer, create_agent};
pub use viewer::{DiagramState, DiagramViewer};
pub use viewport::{BUTTON_STEP, MAX_SCALE, MIN_SCALE, Viewport, WHEEL_STEP};
