//! Page chrome: document wrapper, header and footer.

use std::fmt::Write;

use folio_config::SiteConfig;
use folio_renderer::escape_html;

use crate::clock::Clock;

/// Path of the stylesheet served with every page.
pub const STYLESHEET_PATH: &str = "/assets/site.css";
/// Path of the progressive-enhancement script.
pub const SCRIPT_PATH: &str = "/assets/site.js";

/// Wraps view markup in the shared header and footer.
pub struct Shell<'a> {
    site: &'a SiteConfig,
    clock: &'a dyn Clock,
    scroll_reset: bool,
}

impl<'a> Shell<'a> {
    pub fn new(site: &'a SiteConfig, clock: &'a dyn Clock) -> Self {
        Self {
            site,
            clock,
            scroll_reset: false,
        }
    }

    /// Mark documents so the script scrolls to the top once shown.
    #[must_use]
    pub fn with_scroll_reset(mut self, reset: bool) -> Self {
        self.scroll_reset = reset;
        self
    }

    /// Render a complete HTML document around `main`.
    ///
    /// # Arguments
    ///
    /// * `title` - Page title, suffixed with the site owner
    /// * `main` - Trusted HTML placed inside `<main>`
    #[must_use]
    pub fn document(&self, title: &str, main: &str) -> String {
        let mut html = String::with_capacity(main.len() + 4096);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let _ = writeln!(
            html,
            "<title>{} | {}</title>",
            escape_html(title),
            escape_html(&self.site.owner)
        );
        let _ = writeln!(
            html,
            r#"<meta name="description" content="{}">"#,
            escape_html(&self.site.headline)
        );
        let _ = writeln!(html, r#"<link rel="stylesheet" href="{STYLESHEET_PATH}">"#);
        let _ = writeln!(html, r#"<script src="{SCRIPT_PATH}" defer></script>"#);
        html.push_str("</head>\n");
        html.push_str(if self.scroll_reset {
            "<body data-scroll-reset>\n"
        } else {
            "<body>\n"
        });
        html.push_str("<div class=\"app\">\n");

        self.header(&mut html);
        html.push_str("<main>\n");
        html.push_str(main);
        html.push_str("\n</main>\n");
        self.footer(&mut html);

        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    /// Header with greeting, tagline, intro and profile links.
    pub fn header(&self, html: &mut String) {
        let site = self.site;
        html.push_str("<header class=\"header\">\n<div class=\"header-content\">\n");
        let _ = writeln!(
            html,
            r#"<h1 class="greeting"><a href="/">{}</a></h1>"#,
            escape_html(&site.greeting)
        );
        let _ = writeln!(html, r#"<p class="tagline">{}</p>"#, escape_html(&site.tagline));
        let _ = writeln!(html, r#"<p class="intro">{}</p>"#, escape_html(&site.intro));
        html.push_str("<nav class=\"nav-links\">\n");
        for link in &site.links {
            let _ = writeln!(
                html,
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_html(&link.url),
                escape_html(&link.label)
            );
        }
        let _ = writeln!(
            html,
            r#"<a href="mailto:{}">Email</a>"#,
            escape_html(&site.email)
        );
        html.push_str("</nav>\n</div>\n</header>\n");
    }

    /// Footer with contact links and the copyright line.
    ///
    /// The year comes from the clock on every call.
    pub fn footer(&self, html: &mut String) {
        let site = self.site;
        html.push_str("<footer class=\"footer\" id=\"contact\">\n<div class=\"footer-links\">\n");
        let _ = writeln!(
            html,
            r#"<a href="mailto:{0}">{0}</a>"#,
            escape_html(&site.email)
        );
        for link in &site.links {
            let _ = writeln!(
                html,
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_html(&link.url),
                escape_html(&link.label)
            );
        }
        html.push_str("</div>\n");
        let _ = writeln!(html, "<p>{}</p>", copyright(self.clock.current_year(), &site.owner));
        html.push_str("</footer>\n");
    }
}

/// Copyright line for `year`, escaped.
#[must_use]
pub fn copyright(year: i32, owner: &str) -> String {
    format!("© {year} {}", escape_html(owner))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clock::FixedClock;

    fn footer(shell: &Shell<'_>) -> String {
        let mut html = String::new();
        shell.footer(&mut html);
        html
    }

    #[test]
    fn test_footer_tracks_clock_between_renders() {
        let site = SiteConfig::default();
        let clock = FixedClock::new(2024);
        let shell = Shell::new(&site, &clock);

        assert!(footer(&shell).contains("© 2024 Abhishek Chandra"));
        clock.set_year(2025);
        let second = footer(&shell);
        assert!(second.contains("© 2025 Abhishek Chandra"));
        assert!(!second.contains("2024"));
    }

    #[test]
    fn test_header_links_in_order_with_mailto() {
        let site = SiteConfig::default();
        let clock = FixedClock::new(2024);
        let mut html = String::new();
        Shell::new(&site, &clock).header(&mut html);

        let github = html.find("GitHub").unwrap();
        let linkedin = html.find("LinkedIn").unwrap();
        let email = html.find(">Email<").unwrap();
        assert!(github < linkedin && linkedin < email);
        assert!(html.contains(r#"href="mailto:me@abhichandra.com""#));
        assert!(html.contains("Hi, I&#x27;m Abhishek"));
    }

    #[test]
    fn test_document_escapes_title() {
        let site = SiteConfig::default();
        let clock = FixedClock::new(2024);
        let html = Shell::new(&site, &clock).document("A <b>", "<p>body</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &lt;b&gt; | Abhishek Chandra</title>"));
        assert!(html.contains("<main>\n<p>body</p>\n</main>"));
    }

    #[test]
    fn test_scroll_reset_marker() {
        let site = SiteConfig::default();
        let clock = FixedClock::new(2025);
        let shell = Shell::new(&site, &clock);
        assert!(shell.document("T", "").contains("<body>\n"));
        let reset = shell.with_scroll_reset(true).document("T", "");
        assert!(reset.contains("<body data-scroll-reset>\n"));
    }

    #[test]
    fn test_copyright_format() {
        assert_eq!(copyright(2030, "A & B"), "© 2030 A &amp; B");
    }
}
