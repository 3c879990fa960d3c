//! Colored terminal output.

use std::fmt::Display;

use console::{Style, Term};

/// Writes status lines to stderr.
pub(crate) struct Output {
    term: Term,
    heading: Style,
    label: Style,
    ok: Style,
    warn: Style,
    err: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            heading: Style::new().cyan().bold(),
            label: Style::new().dim(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            err: Style::new().red(),
        }
    }

    pub(crate) fn heading(&self, msg: &str) {
        self.line(&self.heading.apply_to(msg).to_string());
    }

    /// `label: value` with a dimmed label.
    pub(crate) fn field(&self, label: &str, value: impl Display) {
        self.line(&format!("  {} {value}", self.label.apply_to(format!("{label}:"))));
    }

    pub(crate) fn line(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.ok.apply_to(msg).to_string());
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.warn.apply_to(msg).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.err.apply_to(msg).to_string());
    }
}
