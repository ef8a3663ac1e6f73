//! Stash-box identifier helpers.
//!
//! A stash-box is an external metadata source addressed by its GraphQL
//! endpoint. Local entities carry at most one [`StashId`] per endpoint.

#[cfg(test)]
#[path = "stashbox_test.rs"]
mod stashbox_test;

use crate::models::StashId;

/// Merge `src` into `dest`, keyed by endpoint.
///
/// Entries in `src` replace any `dest` entry for the same endpoint. The result
/// is the surviving `dest` entries in their original order followed by all of
/// `src` in its original order. Neither input is modified.
#[must_use]
pub fn merge_stash_ids(dest: &[StashId], src: &[StashId]) -> Vec<StashId> {
    let mut merged = Vec::with_capacity(dest.len() + src.len());
    for existing in dest {
        if src.iter().any(|incoming| incoming.endpoint == existing.endpoint) {
            tracing::debug!(endpoint = %existing.endpoint, replaced = %existing.stash_id, "stash id overridden");
            continue;
        }
        merged.push(existing.clone());
    }
    merged.extend(src.iter().cloned());
    merged
}

/// Name to show for a configured stash-box; unnamed boxes are numbered from 1.
#[must_use]
pub fn display_name(name: &str, index: usize) -> String {
    if name.is_empty() {
        format!("Stash-Box #{}", index + 1)
    } else {
        name.to_owned()
    }
}

/// Web base URL for a stash-box GraphQL endpoint.
///
/// `https://stashdb.org/graphql` yields `https://stashdb.org/`, which page
/// links are appended to (`scenes/{id}`, `performers/{id}`).
#[must_use]
pub fn endpoint_base(endpoint: &str) -> Option<&str> {
    let start = ["https://", "http://"].iter().filter_map(|scheme| endpoint.find(*scheme)).min()?;
    let rest = &endpoint[start..];
    let authority_start = rest.find("://")? + 3;
    let marker = rest[authority_start..].find("/graphql")? + authority_start;
    Some(&rest[..=marker])
}
