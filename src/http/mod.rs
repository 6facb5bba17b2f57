//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware)
//!     → redirect handler (exact path lookup)
//!     → 301 + Location, or 404
//! ```

pub mod server;

pub use server::{build_router, AppState};
