//! Mapping snapshot subsystem.
//!
//! # Data Flow
//! ```text
//! snapshot file (JSON, produced by the external migration process)
//!     → loader.rs (read & deserialize)
//!     → MappingSnapshot (records + audit metadata)
//!     → consumed once by the path index at startup, then dropped
//! ```
//!
//! # Design Decisions
//! - Decode-only: the migration process is trusted to emit internally
//!   consistent records, so old/new URLs are not re-verified here
//! - `mappings` is a BTreeMap so index construction iterates in a
//!   stable order
//! - The `not_found` set is retained for audit only and never consulted
//!   at request time

pub mod loader;
pub mod schema;

pub use loader::{load_mapping_snapshot, MappingError};
pub use schema::{MappingSnapshot, UserMapping};
