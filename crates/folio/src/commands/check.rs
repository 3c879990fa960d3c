//! `folio check` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::Config;
use folio_content::ProjectFilter;
use folio_site::Site;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Load config, catalog and pages, failing on the first violated invariant.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        config.validate()?;
        let site = Site::builtin(config.site.clone())?;

        let categories = site.content().list_categories();
        let entries: usize = categories.iter().map(|c| c.entries.len()).sum();
        let internal = site.content().internal_links().count();

        output.heading("Content");
        output.field(
            "Resources",
            format!(
                "{} categories, {entries} links ({internal} internal)",
                categories.len()
            ),
        );
        output.field("Projects", site.content().projects(ProjectFilter::All).count());
        output.field("Pages", site.pages().len());
        for page in site.pages().pages() {
            let diagrams = page
                .code_blocks()
                .iter()
                .filter(|block| {
                    block
                        .language
                        .is_some_and(|lang| folio_diagrams::DiagramLanguage::parse(lang).is_some())
                })
                .count();
            tracing::info!(route = %page.route, title = %page.title, diagrams, "Page");
        }
        output.success("All checks passed");
        Ok(())
    }
}
