//! Configuration file
//!
//! A JSON document; every field has a default so a partial file is valid.
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8080, "cors_origin": "http://localhost:3000" },
//!   "database_path": "inventory.db",
//!   "log_format": "pretty"
//! }
//! ```
//!
//! `"database_path": null` keeps products in memory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;

use super::errors::{CliError, CliResult};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "./inventory.json";

/// Service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// SQLite database file; `None` selects the in-memory store
    #[serde(default = "default_database_path")]
    pub database_path: Option<PathBuf>,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_database_path() -> Option<PathBuf> {
    Some(PathBuf::from("inventory.db"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            database_path: default_database_path(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load `path` if given, otherwise the default file if it exists,
    /// otherwise built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Write this configuration to a new file. Existing files are left alone.
    pub fn write_new(&self, path: &Path) -> CliResult<()> {
        if path.exists() {
            return Err(CliError::already_exists(path.display()));
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content + "\n")?;
        Ok(())
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        if self.server.cors_origin_header().is_none() {
            return Err(CliError::config_error(format!(
                "Invalid server.cors_origin: '{}'",
                self.server.cors_origin
            )));
        }

        Ok(())
    }
}
