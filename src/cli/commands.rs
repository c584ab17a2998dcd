//! CLI command implementations
//!
//! `serve` wires the layers together explicitly: repository, then service,
//! then HTTP server, all built once before the listener starts.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::{init_logging, LogFormat};
use crate::repository::{InMemoryProductRepository, ProductRepository, SqliteProductRepository};
use crate::service::ProductService;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub in_memory: bool,
    pub log_format: Option<LogFormat>,
}

impl ServeOverrides {
    /// Apply the overrides and re-validate
    pub fn apply(self, mut config: Config) -> CliResult<Config> {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(database) = self.database {
            config.database_path = Some(database);
        }
        if self.in_memory {
            config.database_path = None;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run a specific command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            database,
            in_memory,
            log_format,
        } => {
            let overrides = ServeOverrides {
                host,
                port,
                database,
                in_memory,
                log_format,
            };
            serve(config.as_deref(), overrides)
        }
        Command::InitConfig { config } => init_config(&config),
    }
}

/// Write a default configuration file
pub fn init_config(path: &Path) -> CliResult<()> {
    Config::default().write_new(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Open the repository the config selects
pub fn open_repository(config: &Config) -> CliResult<Arc<dyn ProductRepository>> {
    let repository: Arc<dyn ProductRepository> = match &config.database_path {
        Some(path) => {
            info!(path = %path.display(), "opening SQLite product store");
            Arc::new(SqliteProductRepository::open(path)?)
        }
        None => {
            info!("using in-memory product store");
            Arc::new(InMemoryProductRepository::new())
        }
    };
    Ok(repository)
}

/// Load config, wire the layers, and serve until shutdown
pub fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> CliResult<()> {
    let config = overrides.apply(Config::load_or_default(config_path)?)?;
    init_logging(config.log_format);
    info!(log_format = %config.log_format, "logging initialized");

    let repository = open_repository(&config)?;
    let service = ProductService::new(repository);
    let server = HttpServer::with_config(config.server.clone(), service);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::serve_failed(format!("HTTP server error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = ServeOverrides {
            host: Some("127.0.0.1".to_string()),
            port: Some(9000),
            in_memory: true,
            log_format: Some(LogFormat::Json),
            ..Default::default()
        };
        let config = overrides.apply(Config::default()).unwrap();
        assert_eq!(config.server.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.database_path, None);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_overrides_are_validated() {
        let overrides = ServeOverrides {
            port: Some(0),
            ..Default::default()
        };
        assert!(overrides.apply(Config::default()).is_err());
    }

    #[test]
    fn test_open_repository_sqlite_file() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            database_path: Some(tmp.path().join("inventory.db")),
            ..Default::default()
        };
        let repository = open_repository(&config).unwrap();
        assert!(repository.find_all().unwrap().is_empty());
        assert!(tmp.path().join("inventory.db").exists());
    }

    #[test]
    fn test_open_repository_memory() {
        let config = Config {
            database_path: None,
            ..Default::default()
        };
        let repository = open_repository(&config).unwrap();
        assert!(!repository.exists_by_id(1).unwrap());
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("inventory.json");
        init_config(&path).unwrap();
        assert!(init_config(&path).is_err());
    }
}
