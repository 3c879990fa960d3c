//! Category iconography.

/// Icon used for category titles without a dedicated symbol.
pub const DEFAULT_ICON: &str = "📄";

/// Select the icon for a resource category title.
///
/// Matching is case-insensitive and total: unknown titles fall back to
/// [`DEFAULT_ICON`].
#[must_use]
pub fn category_icon(title: &str) -> &'static str {
    match title.to_lowercase().as_str() {
        "keda & autoscaling" => "⚡",
        "kubernetes operations" => "☸️",
        "infrastructure monitoring" => "📊",
        "kafka integration" => "🔄",
        "scripts & tools" => "🛠️",
        _ => DEFAULT_ICON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_titles() {
        assert_eq!(category_icon("KEDA & Autoscaling"), "⚡");
        assert_eq!(category_icon("Kubernetes Operations"), "☸️");
        assert_eq!(category_icon("Infrastructure Monitoring"), "📊");
        assert_eq!(category_icon("Kafka Integration"), "🔄");
        assert_eq!(category_icon("Scripts & Tools"), "🛠️");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(category_icon("keda & autoscaling"), "⚡");
        assert_eq!(category_icon("KAFKA INTEGRATION"), "🔄");
        assert_eq!(category_icon("sCrIpTs & ToOlS"), "🛠️");
    }

    #[test]
    fn test_unknown_titles_use_default() {
        assert_eq!(category_icon(""), DEFAULT_ICON);
        assert_eq!(category_icon("Cloud Identity"), DEFAULT_ICON);
        assert_eq!(category_icon("Kafka  Integration"), DEFAULT_ICON);
        assert_eq!(category_icon("🛠️"), DEFAULT_ICON);
    }
}
