//! Static assets embedded in the binary.

/// Site stylesheet, served at [`STYLESHEET_PATH`](crate::STYLESHEET_PATH).
pub const STYLESHEET: &str = include_str!("../assets/site.css");

/// Progressive enhancement for hover, filters, diagrams and the background.
pub const SCRIPT: &str = include_str!("../assets/site.js");

/// Asset served at `path`, with its content type.
#[must_use]
pub fn lookup(path: &str) -> Option<(&'static str, &'static str)> {
    match path {
        crate::STYLESHEET_PATH => Some((STYLESHEET, "text/css; charset=utf-8")),
        crate::SCRIPT_PATH => Some((SCRIPT, "text/javascript; charset=utf-8")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert!(lookup("/assets/site.css").unwrap().1.starts_with("text/css"));
        assert!(lookup("/assets/site.js").is_some());
        assert!(lookup("/assets/other.css").is_none());
    }

    #[test]
    fn test_script_wires_markup_hooks() {
        for hook in [
            "\"focusin\"",
            "\"focusout\"",
            "data-scroll-reset",
            "\"pageshow\"",
            ".filter-tab[data-filter]",
            ".projects-empty",
            "event.deltaY === 0",
        ] {
            assert!(SCRIPT.contains(hook), "{hook}");
        }
    }
}
