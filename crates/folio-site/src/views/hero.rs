//! Hero section: headline, stats, terminal mock-up and particle background.

use std::fmt::Write;

use folio_background::{Frame, ParticleField, ViewportSize};
use folio_config::SiteConfig;
use folio_renderer::escape_html;

/// Size the static background snapshot is laid out for.
pub const SNAPSHOT_VIEWPORT: ViewportSize = ViewportSize {
    width: 1200.0,
    height: 640.0,
};

/// Seed of the static snapshot when none is configured.
pub const SNAPSHOT_SEED: u64 = 0x5EED_F011;

/// Label/value pairs under the hero text.
pub const STATS: [(&str, &str); 3] = [
    ("15+", "Years in Tech"),
    ("8", "Certifications"),
    ("HL7/DICOM", "Healthcare Standards"),
];

/// Commands shown in the terminal mock-up.
pub const TERMINAL_COMMANDS: [&str; 4] = [
    "aws sso login --profile prod",
    "kubectl get pods --all-namespaces",
    "helm upgrade --install my-app ./chart",
    "promptheus refine \"Build CI/CD pipeline\"",
];

/// Deterministic first frame for pages without live animation.
#[must_use]
pub fn snapshot(particles: usize, seed: Option<u64>) -> Frame {
    ParticleField::seeded(SNAPSHOT_VIEWPORT, particles, seed.unwrap_or(SNAPSHOT_SEED)).frame()
}

pub fn render(html: &mut String, site: &SiteConfig, background: &Frame) {
    html.push_str("<section class=\"hero\">\n");
    let _ = writeln!(
        html,
        r#"<div class="hero-background" data-stream="/api/background">{}</div>"#,
        background.to_svg()
    );
    html.push_str("<div class=\"hero-content\">\n<div class=\"hero-text\">\n");
    let _ = writeln!(
        html,
        r#"<h1 class="hero-title"><span class="hero-title-main">{}</span><span class="hero-title-sub">{}</span></h1>"#,
        escape_html(&site.owner),
        escape_html(&site.headline)
    );
    let _ = writeln!(
        html,
        r#"<p class="hero-description">{}</p>"#,
        escape_html(&site.description)
    );

    html.push_str("<div class=\"hero-stats\">\n");
    for (value, label) in STATS {
        let _ = writeln!(
            html,
            r#"<div class="stat"><span class="stat-value">{}</span><span class="stat-label">{}</span></div>"#,
            escape_html(value),
            escape_html(label)
        );
    }
    html.push_str("</div>\n</div>\n");

    html.push_str("<div class=\"hero-terminal\" aria-hidden=\"true\">\n");
    html.push_str(
        "<div class=\"terminal-header\"><span class=\"terminal-dot red\"></span><span class=\"terminal-dot yellow\"></span><span class=\"terminal-dot green\"></span></div>\n",
    );
    html.push_str("<div class=\"terminal-body\">\n");
    for command in TERMINAL_COMMANDS {
        let _ = writeln!(
            html,
            r#"<div class="terminal-line"><span class="terminal-prompt">$</span> <span class="terminal-command">{}</span></div>"#,
            escape_html(command)
        );
    }
    html.push_str(
        "<div class=\"terminal-line\"><span class=\"terminal-prompt\">$</span> <span class=\"terminal-cursor\"></span></div>\n",
    );
    html.push_str("</div>\n</div>\n</div>\n</section>\n");
}
