//! Fallback view for unknown routes.

use std::fmt::Write;

use folio_renderer::escape_html;

pub fn render(html: &mut String, route: &str) {
    html.push_str("<section class=\"not-found\">\n<h1>Page not found</h1>\n");
    let _ = writeln!(
        html,
        "<p>Nothing lives at <code>{}</code>.</p>",
        escape_html(route)
    );
    html.push_str("<a href=\"/\" class=\"cta-button\">Back to home</a>\n</section>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_is_escaped() {
        let mut html = String::new();
        render(&mut html, "/<script>");
        assert!(html.contains("<code>/&lt;script&gt;</code>"));
    }
}
