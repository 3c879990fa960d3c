//! Documentation page view.

use std::fmt::Write;

use folio_renderer::{TocEntry, escape_html};

use crate::site::RenderedDocument;

const BACK_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M19 12H5M12 19l-7-7 7-7"/></svg>"#;

pub fn render(html: &mut String, doc: &RenderedDocument) {
    html.push_str("<div class=\"doc-page\">\n<div class=\"doc-container\">\n");
    html.push_str("<header class=\"doc-header\">\n");
    let _ = writeln!(
        html,
        r##"<a href="/#resources" class="doc-back-link">{BACK_ICON} Back to Resources</a>"##
    );
    let _ = writeln!(html, r#"<h1 class="doc-title">{}</h1>"#, escape_html(&doc.title));
    html.push_str("</header>\n");

    toc(html, &doc.toc);

    html.push_str("<article class=\"doc-content\">\n");
    html.push_str(&doc.html);
    html.push_str("\n</article>\n</div>\n</div>\n");
}

fn toc(html: &mut String, entries: &[TocEntry]) {
    if entries.is_empty() {
        return;
    }
    html.push_str("<nav class=\"doc-toc\" aria-label=\"On this page\">\n<h2>On this page</h2>\n<ul>\n");
    for entry in entries {
        let _ = writeln!(
            html,
            r##"<li class="toc-level-{}"><a href="#{}">{}</a></li>"##,
            entry.level,
            entry.id,
            escape_html(&entry.title)
        );
    }
    html.push_str("</ul>\n</nav>\n");
}
