//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("invalid port number: {0}")]
    InvalidPort(u16),

    #[error("ssl enabled but cert or key is empty")]
    IncompleteTls,
}

/// Load and validate the server configuration from a JSON file.
pub fn load_server_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Read)?;
    let config: ServerConfig = serde_json::from_str(&content).map_err(ConfigError::Parse)?;

    validate(&config)?;

    Ok(config)
}

/// Semantic validation; serde has already handled the syntactic side.
///
/// The port's upper bound is enforced by its type, so only zero remains
/// to be rejected here.
fn validate(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.port == 0 {
        return Err(ConfigError::InvalidPort(config.port));
    }

    if config.ssl.enabled && (config.ssl.cert.is_empty() || config.ssl.key.is_empty()) {
        return Err(ConfigError::IncompleteTls);
    }

    Ok(())
}
