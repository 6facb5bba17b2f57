//! Subscription URL Redirect Service Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod mapping;
pub mod net;
pub mod routing;

pub use config::ServerConfig;
pub use mapping::MappingSnapshot;
pub use routing::PathIndex;
