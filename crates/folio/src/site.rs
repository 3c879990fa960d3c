//! Site assembly from configuration.

use std::sync::Arc;

use folio_background::BackgroundConfig;
use folio_config::Config;
use folio_diagrams::{DiagramRenderer, DisabledRenderer, KrokiRenderer};
use folio_site::Site;

use crate::error::CliError;

/// Build the site with the configured diagram renderer and background.
pub(crate) fn build_site(config: &Config) -> Result<Site, CliError> {
    let diagrams = &config.diagrams_resolved;
    let renderer: Arc<dyn DiagramRenderer> = match &diagrams.kroki_url {
        Some(url) => Arc::new(KrokiRenderer::new(url, diagrams.timeout)),
        None => Arc::new(DisabledRenderer),
    };
    let background = BackgroundConfig {
        particles: config.background.particles,
        frame_interval: config.background.frame_interval(),
        seed: None,
    };

    Ok(Site::builtin(config.site.clone())?
        .with_diagram_renderer(renderer)
        .with_background(background))
}
