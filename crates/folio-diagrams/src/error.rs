//! Diagram rendering errors.

/// Error produced while rendering a diagram.
///
/// The viewer never propagates these; it turns them into
/// [`DiagramState::Failed`](crate::DiagramState::Failed) with the message.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("diagram rendering is disabled")]
    Disabled,
    #[error("unsupported diagram language: {0}")]
    UnsupportedLanguage(String),
    #[error("renderer returned invalid SVG")]
    InvalidSvg,
}
