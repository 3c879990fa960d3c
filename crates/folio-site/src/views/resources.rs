//! Technical resources section.

use std::fmt::Write;

use folio_content::{ContentRegistry, ResourceEntry, category_icon};
use folio_renderer::escape_html;

const ARROW_ICON: &str = r#"<svg class="resource-arrow" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M5 12h14M12 5l7 7-7 7"/></svg>"#;

pub fn render(html: &mut String, registry: &ContentRegistry) {
    html.push_str("<section class=\"resources\" id=\"resources\">\n<div class=\"container\">\n");
    html.push_str("<h2>Technical Resources</h2>\n");
    html.push_str(
        "<p class=\"resources-description\">A collection of guides, tools, and documentation for cloud-native infrastructure and Kubernetes operations.</p>\n",
    );
    html.push_str("<div class=\"resource-grid\">\n");
    for category in registry.list_categories() {
        html.push_str("<div class=\"resource-category\">\n");
        let _ = writeln!(
            html,
            r#"<h3 class="category-title"><span class="category-icon">{}</span>{}</h3>"#,
            category_icon(&category.title),
            escape_html(&category.title)
        );
        html.push_str("<ul class=\"resource-list\">\n");
        for entry in &category.entries {
            item(html, entry);
        }
        html.push_str("</ul>\n</div>\n");
    }
    html.push_str("</div>\n</div>\n</section>\n");
}

fn item(html: &mut String, entry: &ResourceEntry) {
    let target = if entry.is_external() {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };
    let _ = writeln!(
        html,
        r#"<li class="resource-item"><a href="{}" class="resource-link"{target}><span class="resource-title">{}</span>{ARROW_ICON}</a><p class="resource-description">{}</p></li>"#,
        escape_html(&entry.url),
        escape_html(&entry.title),
        escape_html(&entry.description)
    );
}
