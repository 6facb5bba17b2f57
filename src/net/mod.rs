//! Network layer subsystem.
//!
//! # Design Decisions
//! - TLS is optional and mutually exclusive with plain HTTP, selected
//!   by `ssl.enabled` in the configuration
//! - Certificate and key arrive as in-memory PEM, never as file paths

pub mod tls;
