//! Mapping snapshot loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::mapping::schema::MappingSnapshot;

/// Error type for snapshot loading.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("failed to read mapping file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse mapping file: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Load the mapping snapshot from a JSON file.
///
/// No structural validation beyond a successful decode: the migration
/// process owns the consistency of the records.
pub fn load_mapping_snapshot(path: &Path) -> Result<MappingSnapshot, MappingError> {
    let content = fs::read_to_string(path).map_err(MappingError::Read)?;
    let snapshot: MappingSnapshot =
        serde_json::from_str(&content).map_err(MappingError::Parse)?;

    Ok(snapshot)
}
