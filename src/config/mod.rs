//! Configuration Module
//!
//! Layered configuration sources:
//! - environment variables (highest precedence)
//! - config file (TOML)
//! - defaults (lowest precedence)

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, DatabaseConfig, LogConfig, ServerConfig, StoreBackend};
