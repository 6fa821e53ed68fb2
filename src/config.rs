use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Where the student and mentor catalogs are loaded from
///
/// Each path is optional; a missing path falls back to the built-in fixtures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    pub students_path: Option<PathBuf>,
    pub mentors_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MatchingSettings {
    /// Number of runner-up mentors returned next to the best match, at most 2
    #[serde(default = "default_alternatives")]
    #[validate(range(max = 2))]
    pub alternatives: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            alternatives: default_alternatives(),
        }
    }
}

fn default_alternatives() -> usize { 2 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MENTOR)
    /// 5. `PORT`, as set by most hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_layered(environment(), std::env::var("PORT").ok().as_deref())
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize::<Self>()?.validated()
    }

    fn load_layered(env: Environment, port: Option<&str>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR__SERVER__PORT -> server.port
            .add_source(env)
            .build()?;

        apply_port_override(settings, port)?
            .try_deserialize::<Self>()?
            .validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.matching
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid matching settings: {}", e)))?;
        Ok(self)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("MENTOR")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the unprefixed `PORT` variable set by most hosting platforms
fn apply_port_override(settings: Config, port: Option<&str>) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = port {
        let port: u16 = port.parse().map_err(|_| {
            ConfigError::Message(format!("PORT must be a valid port number, got {}", port))
        })?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    builder.build()
}
