//! Core trait for enchantment sorters

use crate::error::Result;

/// Reorders the enchantments shown on an item's lore.
///
/// Implementations replace the contents of `enchantments` with the sorted
/// result. On error the collection is left as it was.
pub trait EnchantmentSorter<I>: Send + Sync {
    /// Sort `enchantments` in place.
    fn sort_enchantments(&self, enchantments: &mut Vec<I>) -> Result<()>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}
