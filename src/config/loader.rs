//! Configuration Loader
//!
//! Precedence, highest first:
//! 1. Environment variables
//! 2. Config file (config.toml)
//! 3. Defaults

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, StoreBackend};

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Config file names searched in the working directory
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// Load the application configuration.
///
/// Environment variables use the `TRIVIA_` prefix and `__` as the nesting
/// separator:
/// - `TRIVIA_SERVER__PORT=8080`
/// - `TRIVIA_DATABASE__BACKEND=memory`
/// - `TRIVIA_DATABASE__PATH=/data/trivia.db`
/// - `TRIVIA_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Load the configuration from an explicit file, or search the default names when `None`.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Defaults (lowest precedence)
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("database.backend", StoreBackend::Sqlite.as_str())?
        .set_default("database.path", "data/trivia.db")?
        .set_default("database.max_connections", 5)?
        .set_default("database.seed_categories", true)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. Config file, if present
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // search the default names
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. Environment variables (highest precedence)
    // prefix: TRIVIA_
    // nesting separator: __ (double underscore)
    // names are lowercased, e.g. TRIVIA_DATABASE__SEED_CATEGORIES=false
    builder = builder.add_source(
        Environment::with_prefix("TRIVIA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. Build
    let config = builder.build()?;

    // 5. Deserialize into AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. Validate
    validate_config(&app_config)?;

    Ok(app_config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.backend == StoreBackend::Sqlite && config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max_connections must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// Log the effective configuration at startup
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Store backend: {}", config.database.backend.as_str());
    if config.database.backend == StoreBackend::Sqlite {
        tracing::info!("Database: {}", config.database.path);
        tracing::info!("Database Max Connections: {}", config.database.max_connections);
    }
    tracing::info!("Seed Categories: {}", config.database.seed_categories);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
