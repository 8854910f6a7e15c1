//! Sorter selection from display settings

use super::sorters::{
    AlphabeticSorter, LengthSorter, TypeAlphabeticSorter, TypeLengthSorter,
};
use super::traits::EnchantmentSorter;
use enchsort_model::{CategoryOrder, EnchantmentLookup};
use tracing::debug;

/// Which orderings the lore display asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOptions {
    /// Group enchantments by type before ordering.
    pub by_type: bool,
    /// Order by name length instead of alphabetically.
    pub by_length: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            by_type: true,
            by_length: true,
        }
    }
}

/// Boxed sorter shared across display calls.
pub type BoxedSorter<I> = Box<dyn EnchantmentSorter<I>>;

/// Pick the sorter matching `options`.
///
/// `order` is only consulted by the type-grouped sorters.
pub fn sorter_for<L, O>(
    options: SortOptions,
    lookup: L,
    order: O,
) -> BoxedSorter<L::Item>
where
    L: EnchantmentLookup + Send + Sync + 'static,
    O: CategoryOrder + Send + Sync + 'static,
    L::Item: 'static,
{
    let sorter: BoxedSorter<L::Item> = match (
        options.by_type,
        options.by_length,
    ) {
        (true, true) => Box::new(TypeLengthSorter::new(lookup, order)),
        (true, false) => Box::new(TypeAlphabeticSorter::new(lookup, order)),
        (false, true) => Box::new(LengthSorter::new(lookup)),
        (false, false) => Box::new(AlphabeticSorter::new(lookup)),
    };

    debug!("Selected enchantment sorter: {}", sorter.name());
    sorter
}
