//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON)
//!     → loader.rs (read & deserialize)
//!     → loader.rs (semantic checks: port range, TLS material)
//!     → ServerConfig (validated, immutable)
//!     → host/port/TLS feed the listener, redirect_domain feeds the handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - Any config error is fatal to startup (operator input, fix and restart)
//! - TLS certificate and key live inline in the config as PEM strings,
//!   so the config file itself is sensitive material
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;

pub use loader::{load_server_config, ConfigError};
pub use schema::{ServerConfig, SslConfig, TimeoutConfig};
