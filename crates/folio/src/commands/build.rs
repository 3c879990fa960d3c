//! `folio build` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_static::StaticSiteBuilder;

use crate::error::CliError;
use crate::output::Output;
use crate::site::build_site;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Kroki server URL for diagram rendering; empty disables diagrams.
    #[arg(long, env = "FOLIO_KROKI_URL")]
    kroki_url: Option<String>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            kroki_url: self.kroki_url,
            out_dir: self.out_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = build_site(&config)?;

        let out_dir = &config.build_resolved.out_dir;
        output.heading(&format!("Building site into {}", out_dir.display()));
        let report = StaticSiteBuilder::new(&site).build(out_dir)?;

        output.success(&format!(
            "Wrote home, 404 and {} documentation pages to {}",
            report.pages,
            report.out_dir.display()
        ));
        Ok(())
    }
}
