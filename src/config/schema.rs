//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the JSON
//! configuration file.

use serde::{Deserialize, Serialize};

/// Root configuration for the redirect server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen host (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port. Zero is rejected at load time.
    pub port: u16,

    /// Optional domain to redirect to when the mapped URL is relative
    /// (e.g., "panel.example.com"). Empty means "use the request's host".
    #[serde(default)]
    pub redirect_domain: String,

    /// TLS termination settings.
    #[serde(default)]
    pub ssl: SslConfig,

    /// Server timeout settings.
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

/// TLS settings for the listener.
///
/// Certificate and key are inline PEM strings, not file paths: the whole
/// server identity travels in one config artifact.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SslConfig {
    /// Serve HTTPS instead of HTTP.
    pub enabled: bool,

    /// Certificate chain (PEM).
    pub cert: String,

    /// Private key (PEM).
    pub key: String,
}

/// Timeout configuration bounding slow clients.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Idle connection timeout in seconds.
    pub idle_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 10,
            idle_secs: 60,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
