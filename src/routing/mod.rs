//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Index Compilation (at startup):
//!     MappingSnapshot.mappings
//!     → index.rs (normalize old URLs to bare paths)
//!     → Freeze as immutable PathIndex
//!
//! Incoming Request (path):
//!     → index.rs (exact lookup, no pattern matching)
//!     → target.rs (compute effective redirect target on a hit)
//! ```
//!
//! # Design Decisions
//! - Index compiled at startup, immutable at runtime (lock-free readers)
//! - Exact string match only; `/sub/a` and `/sub/a/` are distinct keys
//! - Duplicate normalized paths resolve deterministically: highest
//!   user id wins
//! - No regex in the hot path

pub mod index;
pub mod target;

pub use index::PathIndex;
pub use target::resolve_redirect_target;

/// Returns true if `value` carries an explicit http(s) scheme.
pub(crate) fn has_url_scheme(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
