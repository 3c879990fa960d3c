//! Configuration management for the folio site.
//!
//! Parses `folio.toml` with serde and discovers it in the current directory
//! or its parents. CLI flags are applied on top via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `diagrams.kroki_url`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Public Kroki instance used when no URL is configured.
pub const DEFAULT_KROKI_URL: &str = "https://kroki.io";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Kroki URL; an empty string disables diagram rendering.
    pub kroki_url: Option<String>,
    pub out_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    diagrams: DiagramsConfigRaw,
    pub background: BackgroundSettings,
    build: BuildConfigRaw,

    /// Resolved diagrams configuration (set after loading).
    #[serde(skip)]
    pub diagrams_resolved: DiagramsConfig,
    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Identity shown in the header, hero and footer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Full name, used in the copyright line.
    pub owner: String,
    /// Header greeting.
    pub greeting: String,
    pub tagline: String,
    pub intro: String,
    /// Hero subtitle.
    pub headline: String,
    /// Hero paragraph.
    pub description: String,
    pub email: String,
    /// External profile links in header order.
    pub links: Vec<LinkConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Abhishek Chandra".to_owned(),
            greeting: "Hi, I'm Abhishek 👋".to_owned(),
            tagline: "Software Engineer | Cloud & Kubernetes Enthusiast | Photographer & Poet"
                .to_owned(),
            intro: "Welcome to my corner of the internet. I build scalable cloud-native \
                    platforms at Radiology Partners and hack on open-source in my spare time."
                .to_owned(),
            headline: "Cloud Infrastructure & DevOps Engineering".to_owned(),
            description: "Building containerized healthcare technology infrastructure at \
                          Radiology Partners. Specializing in Kubernetes orchestration, \
                          AWS/Azure cloud architecture, and AI-powered developer tools. IBM \
                          Outstanding Innovation Award recipient for Enterprise Archive \
                          Containerization."
                .to_owned(),
            email: "me@abhichandra.com".to_owned(),
            links: vec![
                LinkConfig::new("GitHub", "https://github.com/achandra-rp"),
                LinkConfig::new("LinkedIn", "https://linkedin.com/in/abhishekchandra"),
                LinkConfig::new("abhichandra.com", "https://abhichandra.com"),
                LinkConfig::new("poetrybyabhishek.com", "https://poetrybyabhishek.com"),
            ],
        }
    }
}

/// Labelled external link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkConfig {
    pub label: String,
    pub url: String,
}

impl LinkConfig {
    #[must_use]
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_owned(),
            url: url.to_owned(),
        }
    }
}

/// Raw diagrams configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DiagramsConfigRaw {
    kroki_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Resolved diagram rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramsConfig {
    /// Kroki server URL; `None` disables diagram rendering.
    pub kroki_url: Option<String>,
    pub timeout: Duration,
}

impl Default for DiagramsConfig {
    fn default() -> Self {
        Self {
            kroki_url: Some(DEFAULT_KROKI_URL.to_owned()),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Decorative background settings.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct BackgroundSettings {
    pub particles: usize,
    /// Frame period in milliseconds.
    pub frame_ms: u64,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            particles: 50,
            frame_ms: 16,
        }
    }
}

impl BackgroundSettings {
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    out_dir: Option<String>,
}

/// Resolved static build configuration with absolute paths.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Output directory of `folio build`.
    pub out_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. `diagrams.kroki_url`).
        field: String,
        message: String,
    },
}

/// Fail validation with `message` unless `condition` holds.
fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::Validation(message()))
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl Config {
    /// Load configuration, then apply CLI settings on top.
    ///
    /// An explicit `config_path` must exist. Without one, `folio.toml` is
    /// searched for in the current directory and its parents; when none is
    /// found the defaults are used, with `build.out_dir` relative to the
    /// current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the result is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if path.exists() => Some(path.to_path_buf()),
            Some(path) => return Err(ConfigError::NotFound(path.to_path_buf())),
            None => Self::discover_config(),
        };

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default_with_base(&std::env::current_dir().unwrap_or_default()),
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }
        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(kroki_url) = &settings.kroki_url {
            self.diagrams_resolved.kroki_url =
                Some(kroki_url.clone()).filter(|url| !url.is_empty());
        }
        if let Some(out_dir) = &settings.out_dir {
            self.build_resolved.out_dir.clone_from(out_dir);
        }
    }

    /// Nearest `folio.toml` walking up from the current directory.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        cwd.ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            diagrams: DiagramsConfigRaw::default(),
            background: BackgroundSettings::default(),
            build: BuildConfigRaw::default(),
            diagrams_resolved: DiagramsConfig::default(),
            build_resolved: BuildConfig {
                out_dir: base.join("dist"),
            },
            config_path: None,
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(&std::fs::read_to_string(path)?)?;
        config.expand_env_vars()?;
        config.resolve(path.parent().unwrap_or(Path::new(".")));
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        const MAX_PARTICLES: usize = 500;

        let server = &self.server;
        ensure(!server.host.is_empty(), || "server.host cannot be empty".to_owned())?;
        ensure(server.port != 0, || "server.port cannot be 0".to_owned())?;

        ensure(!self.site.owner.is_empty(), || "site.owner cannot be empty".to_owned())?;
        for link in &self.site.links {
            ensure(!link.label.is_empty(), || "site.links.label cannot be empty".to_owned())?;
            ensure(is_http_url(&link.url), || {
                format!("site.links.url must start with http:// or https:// ({})", link.url)
            })?;
        }

        let diagrams = &self.diagrams_resolved;
        if let Some(url) = &diagrams.kroki_url {
            ensure(is_http_url(url), || {
                "diagrams.kroki_url must start with http:// or https://".to_owned()
            })?;
        }
        ensure(!diagrams.timeout.is_zero(), || {
            "diagrams.timeout_secs must be greater than 0".to_owned()
        })?;

        let background = &self.background;
        ensure(background.particles > 0, || {
            "background.particles must be greater than 0".to_owned()
        })?;
        ensure(background.particles <= MAX_PARTICLES, || {
            format!("background.particles cannot exceed {MAX_PARTICLES}")
        })?;
        ensure(background.frame_ms > 0, || {
            "background.frame_ms must be greater than 0".to_owned()
        })
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.diagrams.kroki_url = self
            .diagrams
            .kroki_url
            .as_deref()
            .map(|url| expand::expand_env(url, "diagrams.kroki_url"))
            .transpose()?;
        Ok(())
    }

    /// Resolve raw sections against the config file directory.
    fn resolve(&mut self, config_dir: &Path) {
        let defaults = DiagramsConfig::default();
        self.diagrams_resolved = DiagramsConfig {
            kroki_url: match self.diagrams.kroki_url.as_deref() {
                None => defaults.kroki_url,
                Some("") => None,
                Some(url) => Some(url.trim_end_matches('/').to_owned()),
            },
            timeout: self
                .diagrams
                .timeout_secs
                .map_or(defaults.timeout, Duration::from_secs),
        };

        self.build_resolved = BuildConfig {
            out_dir: config_dir.join(self.build.out_dir.as_deref().unwrap_or("dist")),
        };
    }
}
