//! The `Resource` record — one directory entry — and feed decoding.

use log::warn;
use serde::Deserialize;
use std::collections::HashSet;

/// One directory entry: a service or program listing with searchable text
/// fields and boolean availability flags.
///
/// Records are immutable once received; a reload replaces the whole store
/// rather than mutating entries in place. `id` is expected to be unique
/// within a store. Feeds that repeat an id still decode, but selection
/// resolves to the first occurrence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub location: String,
    #[serde(rename = "openNow")]
    pub open_now: bool,
    // `virtual` is reserved in Rust; the feed keeps the original field name.
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
}

/// Decode a JSON feed body into a resource store.
///
/// Duplicate ids are tolerated (first occurrence wins on lookup) but
/// logged, so a bad feed shows up in `signpost.log` instead of silently
/// producing confusing selection behavior.
pub fn decode_store(body: &[u8]) -> Result<Vec<Resource>, serde_json::Error> {
    let store: Vec<Resource> = serde_json::from_slice(body)?;
    let mut seen = HashSet::new();
    for resource in &store {
        if !seen.insert(resource.id.as_str()) {
            warn!(
                "Resource feed repeats id {:?} ({:?}); first occurrence wins on selection",
                resource.id, resource.title
            );
        }
    }
    Ok(store)
}
