//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Load snapshot → Build index → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     SIGINT/SIGTERM → Stop accepting → Drain in-flight requests
//!     → Force-close after the grace period → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: no request is served before the index exists
//! - Fail fast: any startup error is fatal, logged, non-zero exit
//! - Shutdown is bounded: a drain that exceeds the grace period is
//!   logged but never blocks process exit

pub mod shutdown;
pub mod startup;

pub use startup::StartupError;
