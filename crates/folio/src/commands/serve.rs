//! `folio serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_content::ProjectFilter;
use folio_server::{ServerConfig, run_server};

use crate::error::CliError;
use crate::output::Output;
use crate::site::build_site;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Kroki server URL for diagram rendering; empty disables diagrams.
    #[arg(long, env = "FOLIO_KROKI_URL")]
    kroki_url: Option<String>,
}

impl ServeArgs {
    /// Execute the serve command.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            kroki_url: self.kroki_url,
            out_dir: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = Arc::new(build_site(&config)?);

        output.heading(&format!(
            "Serving {} on http://{}:{}",
            config.site.owner, config.server.host, config.server.port
        ));
        if let Some(path) = &config.config_path {
            output.field("Config", path.display());
        }
        match &config.diagrams_resolved.kroki_url {
            Some(url) => output.field("Kroki", url),
            None => output.warning("Diagram rendering: disabled"),
        }
        output.field("Pages", site.pages().len());
        output.field("Projects", site.content().projects(ProjectFilter::All).count());

        run_server(ServerConfig::from_config(&config, version.to_owned()), site).await?;
        Ok(())
    }
}
