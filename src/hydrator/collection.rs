//! Batch (non-paginated) collection hydration.

use serde_json::Value;
use tracing::debug;

use super::source::required_array;
use super::Batched;
use crate::error::Result;
use crate::models::Collection;

/// Build every entry of the array under `T::COLLECTION_KEY`.
///
/// Multi-id lookups answer unknown IDs with `null`; those entries are
/// skipped. Everything else keeps the order the API returned, so once an
/// entry is skipped the items no longer line up index by index with the
/// requested IDs. Match them by `id` instead.
pub fn collection<T: Batched>(source: &Value, target: &mut Collection<T>) -> Result<()> {
    let entries = required_array(source, T::COLLECTION_KEY)?;

    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if entry.is_null() {
            debug!("Skipping null {} entry at index {}", T::COLLECTION_KEY, index);
            continue;
        }
        items.push(T::from_json(entry)?);
    }

    target.items = items;
    Ok(())
}
