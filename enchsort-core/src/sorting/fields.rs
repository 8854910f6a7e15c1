//! Field marker types for within-group ordering
//!
//! These zero-sized types pick which part of an [`EnchantmentEntry`] a
//! sorter compares once items are grouped. Each marker names its key type.

use enchsort_model::EnchantmentEntry;

/// A comparable value extracted from an enchantment's metadata.
pub trait EntryField: Copy + Clone + Send + Sync + 'static {
    /// The type of key extracted for this field
    type Key: Ord;

    /// Unique identifier for this field
    const ID: &'static str;

    /// Identifier of the type-grouped sorter ordering by this field
    const GROUPED_ID: &'static str;

    /// Read this field's key from `entry`.
    fn extract(&self, entry: &EnchantmentEntry) -> Self::Key;
}

/// Sort by raw display name length, shortest first
#[derive(Copy, Clone, Debug, Default)]
pub struct DisplayLengthField;

impl EntryField for DisplayLengthField {
    type Key = usize;
    const ID: &'static str = "length";
    const GROUPED_ID: &'static str = "type_length";

    fn extract(&self, entry: &EnchantmentEntry) -> usize {
        entry.display_length()
    }
}

/// Sort by raw display name, case-insensitive
#[derive(Copy, Clone, Debug, Default)]
pub struct AlphabeticField;

impl EntryField for AlphabeticField {
    type Key = String;
    const ID: &'static str = "alphabetic";
    const GROUPED_ID: &'static str = "type_alphabetic";

    fn extract(&self, entry: &EnchantmentEntry) -> String {
        entry.raw_name.to_lowercase()
    }
}
