use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Result};
use serde::Deserialize;
use sqlx::sqlite::SqliteConnectOptions;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_PATH: &str = "./janesreviews.sqlite3";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// Environment keys use the `BOOKREVIEWS_` prefix and `__` between
    /// section and field, e.g. `BOOKREVIEWS_SERVER__PORT=9000`.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("BOOKREVIEWS_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("BOOKREVIEWS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> Result<String> {
        if self.server.port == 0 {
            bail!("server.port must be non-zero");
        }
        Ok(format!("{}:{}", self.server.host, self.server.port))
    }

    /// Resolve connection options for the SQLite store.
    pub fn database_options(&self) -> Result<SqliteConnectOptions> {
        self.database.to_options()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub path: String,
    pub create_schema: bool,
    pub foreign_keys: bool,
    pub busy_timeout_ms: u64,
}

impl DatabaseSection {
    pub fn to_options(&self) -> Result<SqliteConnectOptions> {
        let path = self.path.trim();
        if path.is_empty() {
            bail!("database.path must be specified");
        }

        Ok(SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(self.foreign_keys)
            .busy_timeout(Duration::from_millis(self.busy_timeout_ms)))
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
            create_schema: true,
            foreign_keys: true,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
