//! In-memory enchantment metadata.

use enchsort_model::{
    EnchantmentEntry, EnchantmentKey, EnchantmentLookup, LookupError,
};
use std::collections::HashMap;

/// Map-backed [`EnchantmentLookup`] keyed by [`EnchantmentKey`].
///
/// Suitable for plugins that register their enchantments up front, and for
/// tests. Unknown keys are reported as [`LookupError::Unknown`].
#[derive(Debug, Clone, Default)]
pub struct EnchantmentCatalog {
    entries: HashMap<EnchantmentKey, EnchantmentEntry>,
}

impl EnchantmentCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace metadata, returning the previous entry.
    pub fn insert(
        &mut self,
        key: EnchantmentKey,
        entry: EnchantmentEntry,
    ) -> Option<EnchantmentEntry> {
        self.entries.insert(key, entry)
    }

    /// Forget the entry for `key`, returning it if present.
    pub fn remove(&mut self, key: &EnchantmentKey) -> Option<EnchantmentEntry> {
        self.entries.remove(key)
    }

    /// Borrow the entry for `key`.
    pub fn get(&self, key: &EnchantmentKey) -> Option<&EnchantmentEntry> {
        self.entries.get(key)
    }

    /// Number of registered enchantments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EnchantmentLookup for EnchantmentCatalog {
    type Item = EnchantmentKey;

    fn entry(&self, item: &EnchantmentKey) -> Result<EnchantmentEntry, LookupError> {
        self.entries
            .get(item)
            .cloned()
            .ok_or_else(|| LookupError::Unknown(item.to_string()))
    }
}

impl FromIterator<(EnchantmentKey, EnchantmentEntry)> for EnchantmentCatalog {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (EnchantmentKey, EnchantmentEntry)>,
    {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(EnchantmentKey, EnchantmentEntry)> for EnchantmentCatalog {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (EnchantmentKey, EnchantmentEntry)>,
    {
        self.entries.extend(iter);
    }
}
