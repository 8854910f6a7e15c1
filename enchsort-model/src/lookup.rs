//! Collaborator seams consumed by the sorters.
//!
//! Both traits describe things the embedding plugin owns: the metadata cache
//! and the configured order of enchantment types. Sorters only ever read
//! through them.

use crate::{
    enchantment_type::EnchantmentType, entry::EnchantmentEntry,
    error::LookupError,
};
use std::sync::Arc;

/// Resolves an enchantment to its display metadata.
pub trait EnchantmentLookup {
    /// The identifier being sorted.
    type Item;

    /// Fetch the entry for `item`. Unknown items must be reported as an
    /// error rather than answered with a placeholder.
    fn entry(&self, item: &Self::Item) -> Result<EnchantmentEntry, LookupError>;
}

impl<L: EnchantmentLookup + ?Sized> EnchantmentLookup for &L {
    type Item = L::Item;

    fn entry(&self, item: &Self::Item) -> Result<EnchantmentEntry, LookupError> {
        (**self).entry(item)
    }
}

impl<L: EnchantmentLookup + ?Sized> EnchantmentLookup for Arc<L> {
    type Item = L::Item;

    fn entry(&self, item: &Self::Item) -> Result<EnchantmentEntry, LookupError> {
        (**self).entry(item)
    }
}

/// Supplies the ordered list of enchantment types used for grouping.
pub trait CategoryOrder {
    fn ordered_types(&self) -> &[EnchantmentType];
}

impl CategoryOrder for [EnchantmentType] {
    fn ordered_types(&self) -> &[EnchantmentType] {
        self
    }
}

impl CategoryOrder for Vec<EnchantmentType> {
    fn ordered_types(&self) -> &[EnchantmentType] {
        self
    }
}

impl<O: CategoryOrder + ?Sized> CategoryOrder for &O {
    fn ordered_types(&self) -> &[EnchantmentType] {
        (**self).ordered_types()
    }
}

impl<O: CategoryOrder + ?Sized> CategoryOrder for Arc<O> {
    fn ordered_types(&self) -> &[EnchantmentType] {
        (**self).ordered_types()
    }
}
