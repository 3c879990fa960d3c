//! Diagram languages the viewer can render.

use std::fmt;

/// Diagram language of a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramLanguage {
    Mermaid,
    PlantUml,
    GraphViz,
}

/// Fence names and the language each selects. `dot` is an alias.
const FENCE_NAMES: [(&str, DiagramLanguage); 4] = [
    ("mermaid", DiagramLanguage::Mermaid),
    ("plantuml", DiagramLanguage::PlantUml),
    ("graphviz", DiagramLanguage::GraphViz),
    ("dot", DiagramLanguage::GraphViz),
];

impl DiagramLanguage {
    /// Language for a fence info string, if it names a diagram.
    ///
    /// Matching is exact and case-sensitive; a `kroki-` prefix is ignored.
    #[must_use]
    pub fn parse(fence: &str) -> Option<Self> {
        let name = fence.strip_prefix("kroki-").unwrap_or(fence);
        FENCE_NAMES
            .iter()
            .find_map(|&(candidate, language)| (candidate == name).then_some(language))
    }

    /// Path segment of the Kroki endpoint (`/{endpoint}/svg`).
    #[must_use]
    pub fn kroki_endpoint(self) -> &'static str {
        match self {
            Self::Mermaid => "mermaid",
            Self::PlantUml => "plantuml",
            Self::GraphViz => "graphviz",
        }
    }
}

impl fmt::Display for DiagramLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kroki_endpoint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_names() {
        assert_eq!(DiagramLanguage::parse("mermaid"), Some(DiagramLanguage::Mermaid));
        assert_eq!(DiagramLanguage::parse("kroki-plantuml"), Some(DiagramLanguage::PlantUml));
        assert_eq!(DiagramLanguage::parse("dot"), Some(DiagramLanguage::GraphViz));
    }

    #[test]
    fn test_non_diagram_fences() {
        assert_eq!(DiagramLanguage::parse("bash"), None);
        assert_eq!(DiagramLanguage::parse("Mermaid"), None);
        assert_eq!(DiagramLanguage::parse("kroki-"), None);
        assert_eq!(DiagramLanguage::parse(""), None);
    }

    #[test]
    fn test_display_matches_endpoint() {
        assert_eq!(DiagramLanguage::GraphViz.to_string(), "graphviz");
        assert_eq!(DiagramLanguage::PlantUml.kroki_endpoint(), "plantuml");
    }
}
