//! Mapping snapshot schema definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Old-to-new subscription URL record for a single migrated account.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserMapping {
    /// Account identifier on the legacy panel.
    pub user_id: i64,

    /// Subscription URL on the legacy panel; absolute URL or bare path.
    pub old_subscription_url: String,

    /// Subscription URL on the replacement panel; absolute or relative.
    pub new_subscription_url: String,

    /// Account name on the replacement panel, when the migration knew it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// How the migration process matched this account (provenance tag).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_by: Option<String>,
}

/// Complete mapping snapshot: all records plus summary metadata.
///
/// The metadata fields are informational; only `mappings` feeds the
/// path index.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MappingSnapshot {
    /// When the migration process generated this snapshot.
    pub generated_at: String,

    pub total_users: u64,
    pub mapped_users: u64,
    pub not_found_users: u64,

    /// Free-form URL format hints from the migration process; never
    /// consulted by matching logic.
    pub url_formats: BTreeMap<String, String>,

    /// Migrated records, keyed by an opaque identifier.
    pub mappings: BTreeMap<String, UserMapping>,

    /// Accounts the migration could not match; audit only.
    pub not_found: BTreeMap<String, UserMapping>,
}
