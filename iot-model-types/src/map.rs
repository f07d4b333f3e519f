//! Map-field helpers used by the generated `add_*_entry` methods.

use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Inserts `key` into a map field, creating the map when absent.
///
/// Fails with [`Error::DuplicateKey`] if the key is already present; the map
/// is left untouched in that case.
pub fn insert_unique<V>(
    map: &mut Option<BTreeMap<String, V>>,
    shape: &'static str,
    field: &'static str,
    key: String,
    value: V,
) -> Result<()> {
    if map.as_ref().is_some_and(|m| m.contains_key(&key)) {
        debug!(shape, field, key = %key, "duplicate map key rejected");
        return Err(Error::DuplicateKey { shape, field, key });
    }
    map.get_or_insert_with(BTreeMap::new).insert(key, value);
    Ok(())
}
