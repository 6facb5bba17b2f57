//! Path index construction and lookup.

use std::collections::HashMap;

use crate::mapping::MappingSnapshot;
use crate::routing::has_url_scheme;

/// Immutable reverse lookup from normalized old path to new URL.
///
/// Built exactly once per process start and never mutated afterwards,
/// so concurrent readers need no synchronization.
#[derive(Debug)]
pub struct PathIndex {
    entries: HashMap<String, String>,
}

impl PathIndex {
    /// Build the index from a mapping snapshot.
    ///
    /// When two records normalize to the same old path, the record with
    /// the highest user id wins; ties fall back to the snapshot's stable
    /// key order (last wins). Collisions are logged.
    pub fn build(snapshot: &MappingSnapshot) -> Self {
        let mut entries: HashMap<String, (i64, String)> = HashMap::new();

        for mapping in snapshot.mappings.values() {
            let path = normalize_old_path(&mapping.old_subscription_url);

            let existing_id = entries.get(&path).map(|(id, _)| *id);
            match existing_id {
                Some(kept_id) if kept_id > mapping.user_id => {
                    tracing::warn!(
                        path = %path,
                        kept_user_id = kept_id,
                        dropped_user_id = mapping.user_id,
                        "duplicate old path in snapshot"
                    );
                }
                _ => {
                    if let Some(dropped_id) = existing_id {
                        tracing::warn!(
                            path = %path,
                            kept_user_id = mapping.user_id,
                            dropped_user_id = dropped_id,
                            "duplicate old path in snapshot"
                        );
                    }
                    entries.insert(path, (mapping.user_id, mapping.new_subscription_url.clone()));
                }
            }
        }

        Self {
            entries: entries
                .into_iter()
                .map(|(path, (_, new_url))| (path, new_url))
                .collect(),
        }
    }

    /// Exact-match lookup of a request path.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize an old subscription URL to a bare request path.
///
/// Absolute URLs keep everything from the third `/` onward (the scheme's
/// `//` counts as the first two); an absolute URL without a path becomes
/// `/`. Bare paths are used unchanged.
pub fn normalize_old_path(url: &str) -> String {
    if !has_url_scheme(url) {
        return url.to_string();
    }

    let mut slashes = 0;
    for (i, c) in url.char_indices() {
        if c == '/' {
            slashes += 1;
            if slashes == 3 {
                return url[i..].to_string();
            }
        }
    }

    "/".to_string()
}
