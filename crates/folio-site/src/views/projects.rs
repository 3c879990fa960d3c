//! Featured projects section.

use std::fmt::Write;

use folio_content::{ContentRegistry, Project, ProjectCategory, ProjectFilter};
use folio_renderer::escape_html;

use crate::showcase::ProjectShowcase;

const GITHUB_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M12 .5C5.65.5.5 5.65.5 12c0 5.08 3.29 9.39 7.86 10.91.58.11.79-.25.79-.56v-2c-3.2.7-3.87-1.37-3.87-1.37-.52-1.33-1.28-1.69-1.28-1.69-1.04-.71.08-.7.08-.7 1.15.08 1.76 1.18 1.76 1.18 1.03 1.76 2.69 1.25 3.35.96.1-.74.4-1.25.73-1.54-2.55-.29-5.24-1.28-5.24-5.68 0-1.26.45-2.28 1.18-3.09-.12-.29-.51-1.46.11-3.04 0 0 .97-.31 3.17 1.18a11 11 0 0 1 5.77 0c2.2-1.49 3.17-1.18 3.17-1.18.63 1.58.23 2.75.11 3.04.74.81 1.18 1.83 1.18 3.09 0 4.41-2.69 5.38-5.25 5.67.41.36.78 1.06.78 2.14v3.17c0 .31.21.68.8.56A11.5 11.5 0 0 0 23.5 12C23.5 5.65 18.35.5 12 .5z"/></svg>"#;
const EXTERNAL_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6M15 3h6v6M10 14L21 3"/></svg>"#;

fn category_icon(category: ProjectCategory) -> &'static str {
    match category {
        ProjectCategory::Infrastructure => {
            r#"<svg width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M4 17l6-6-6-6M12 19h8"/></svg>"#
        }
        ProjectCategory::Development => {
            r#"<svg width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M16 18l6-6-6-6M8 6l-6 6 6 6"/></svg>"#
        }
        ProjectCategory::Ai => {
            r#"<svg width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><circle cx="12" cy="12" r="3"/><path d="M12 1v4M12 19v4M4.2 4.2l2.8 2.8M17 17l2.8 2.8M1 12h4M19 12h4M4.2 19.8L7 17M17 7l2.8-2.8"/></svg>"#
        }
    }
}

/// Render the showcase for the current state.
pub fn render(html: &mut String, registry: &ContentRegistry, showcase: &ProjectShowcase) {
    html.push_str("<section class=\"projects-section\" id=\"projects\">\n<div class=\"container\">\n");
    html.push_str("<div class=\"section-header\">\n");
    html.push_str(
        "<h2 class=\"section-title\"><span class=\"section-number\">02.</span> Featured Projects</h2>\n",
    );
    html.push_str(
        "<p class=\"section-description\">A selection of tools and applications I've built to solve real-world problems</p>\n",
    );
    html.push_str("</div>\n");

    filter_tabs(html, showcase.filter());

    // Every card is rendered so the script can switch filters in place;
    // cards outside the active filter are hidden.
    let empty = showcase.visible_projects(registry).is_empty();
    let _ = writeln!(
        html,
        r#"<p class="projects-empty"{}>No projects in this category yet.</p>"#,
        if empty { "" } else { " hidden" }
    );
    html.push_str("<div class=\"projects-grid\">\n");
    for project in registry.projects(ProjectFilter::All) {
        card(html, project, showcase);
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"projects-cta\">\n<p>Interested in collaborating or learning more?</p>\n");
    html.push_str("<a href=\"#contact\" class=\"cta-button\">Get In Touch →</a>\n</div>\n");
    html.push_str("</div>\n</section>\n");
}

fn filter_tabs(html: &mut String, active: ProjectFilter) {
    html.push_str("<nav class=\"filter-tabs\" aria-label=\"Project categories\">\n");
    for tab in ProjectFilter::TABS {
        let class = if tab == active {
            "filter-tab active"
        } else {
            "filter-tab"
        };
        let _ = writeln!(
            html,
            r##"<a class="{class}" href="/?filter={}#projects" data-filter="{}">{}</a>"##,
            tab.as_str(),
            tab.as_str(),
            escape_html(tab.label())
        );
    }
    html.push_str("</nav>\n");
}

fn card(html: &mut String, project: &Project, showcase: &ProjectShowcase) {
    let title = escape_html(&project.title);
    let class = if showcase.is_hovered(project) {
        "project-card hovered"
    } else {
        "project-card"
    };
    let hidden = if showcase.filter().matches(project) {
        ""
    } else {
        " hidden"
    };
    let _ = writeln!(
        html,
        r#"<article class="{class}" data-project-id="{}" data-category="{}" tabindex="0"{hidden}>"#,
        escape_html(&project.id),
        project.category.as_str()
    );

    html.push_str("<div class=\"project-header\">\n");
    let _ = writeln!(
        html,
        r#"<div class="project-icon">{}</div>"#,
        category_icon(project.category)
    );
    html.push_str("<div class=\"project-links\">\n");
    let _ = writeln!(
        html,
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="project-link" aria-label="View {title} on GitHub">{GITHUB_ICON}</a>"#,
        escape_html(&project.repository_url)
    );
    if let Some(demo) = &project.demo_url {
        let _ = writeln!(
            html,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="project-link" aria-label="View {title} demo">{EXTERNAL_ICON}</a>"#,
            escape_html(demo)
        );
    }
    html.push_str("</div>\n</div>\n");

    let _ = writeln!(html, r#"<h3 class="project-title">{title}</h3>"#);
    let _ = writeln!(
        html,
        r#"<p class="project-description" data-description="{}" data-long-description="{}">{}</p>"#,
        escape_html(&project.description),
        escape_html(&project.long_description),
        escape_html(showcase.displayed_description(project))
    );

    html.push_str("<div class=\"project-tech\">\n");
    for tag in &project.tags {
        let _ = writeln!(html, r#"<span class="tech-tag">{}</span>"#, escape_html(tag));
    }
    html.push_str("</div>\n");

    let _ = writeln!(
        html,
        r#"<div class="project-category"><span class="category-badge {}">{}</span></div>"#,
        project.category.as_str(),
        escape_html(project.category.label())
    );
    html.push_str("</article>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_with(showcase: &ProjectShowcase) -> String {
        let registry = ContentRegistry::builtin().unwrap();
        let mut html = String::new();
        render(&mut html, &registry, showcase);
        html
    }

    #[test]
    fn test_all_cards_and_active_tab() {
        let html = render_with(&ProjectShowcase::new());
        assert_eq!(html.matches("<article class=\"project-card\"").count(), 3);
        assert_eq!(html.matches(r#"tabindex="0">"#).count(), 3);
        assert!(html.contains(r##"<a class="filter-tab active" href="/?filter=all#projects""##));
        assert!(html.contains("aria-label=\"View Promptheus on GitHub\""));
        assert!(html.contains("<span class=\"category-badge ai\">AI/ML</span>"));
    }

    #[test]
    fn test_filtered_cards() {
        let mut showcase = ProjectShowcase::new();
        showcase.select_filter("development").unwrap();
        let html = render_with(&showcase);
        assert!(html.contains(
            r#"data-project-id="py-awsutil" data-category="development" tabindex="0">"#
        ));
        assert!(html.contains(
            r#"data-project-id="awsutil" data-category="infrastructure" tabindex="0" hidden>"#
        ));
        assert!(html.contains(r#"<p class="projects-empty" hidden>"#));
        assert!(html.contains(r#"<a class="filter-tab active" href="/?filter=development"#));
    }

    #[test]
    fn test_hovered_card_shows_long_description() {
        let registry = ContentRegistry::builtin().unwrap();
        let project = registry.project("promptheus").unwrap();
        let mut showcase = ProjectShowcase::new();
        showcase.hover("promptheus");

        let html = render_with(&showcase);

        assert!(html.contains(r#"<article class="project-card hovered" data-project-id="promptheus""#));
        assert!(html.contains(&format!(
            "\">{}</p>",
            escape_html(&project.long_description)
        )));
        assert_eq!(html.matches("project-card hovered").count(), 1);
    }
}
