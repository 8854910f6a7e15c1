//! Concrete enchantment sorters
//!
//! [`GroupedSorter`] groups by enchantment type in the configured order and
//! orders each group by a field; [`FlatSorter`] orders by the field alone.
//! The aliases at the bottom name the four combinations display settings
//! can select.

use super::fields::{AlphabeticField, DisplayLengthField, EntryField};
use super::grouped::{grouped_order, sort_keyed_in_place};
use super::traits::EnchantmentSorter;
use super::utils::take_by_indices;
use crate::error::Result;
use enchsort_model::{CategoryOrder, EnchantmentLookup};

/// Group by type, then order each group by `F`.
#[derive(Debug, Clone)]
pub struct GroupedSorter<L, O, F> {
    lookup: L,
    order: O,
    field: F,
}

impl<L, O, F> GroupedSorter<L, O, F>
where
    L: EnchantmentLookup,
    O: CategoryOrder,
    F: EntryField + Default,
{
    /// Sorter reading metadata from `lookup` and group order from `order`.
    pub fn new(lookup: L, order: O) -> Self {
        Self {
            lookup,
            order,
            field: F::default(),
        }
    }
}

impl<L, O, F> EnchantmentSorter<L::Item> for GroupedSorter<L, O, F>
where
    L: EnchantmentLookup + Send + Sync,
    O: CategoryOrder + Send + Sync,
    F: EntryField,
{
    fn sort_enchantments(&self, enchantments: &mut Vec<L::Item>) -> Result<()> {
        let types = self.order.ordered_types();
        if types.is_empty() {
            enchantments.clear();
            return Ok(());
        }

        // One lookup per item; both the group and the key read from it.
        let entries = enchantments
            .iter()
            .map(|item| self.lookup.entry(item))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let order = grouped_order(
            &entries,
            types,
            |entry| Ok(entry.enchantment_type.clone()),
            |entry| Ok(self.field.extract(entry)),
        )?;
        take_by_indices(enchantments, &order);
        Ok(())
    }

    fn name(&self) -> &'static str {
        F::GROUPED_ID
    }
}

/// Order every enchantment by `F`, ignoring type. Nothing is dropped.
#[derive(Debug, Clone)]
pub struct FlatSorter<L, F> {
    lookup: L,
    field: F,
}

impl<L, F> FlatSorter<L, F>
where
    L: EnchantmentLookup,
    F: EntryField + Default,
{
    /// Sorter reading metadata from `lookup`.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            field: F::default(),
        }
    }
}

impl<L, F> EnchantmentSorter<L::Item> for FlatSorter<L, F>
where
    L: EnchantmentLookup + Send + Sync,
    F: EntryField,
{
    fn sort_enchantments(&self, enchantments: &mut Vec<L::Item>) -> Result<()> {
        sort_keyed_in_place(enchantments, |item| {
            Ok(self.field.extract(&self.lookup.entry(item)?))
        })
    }

    fn name(&self) -> &'static str {
        F::ID
    }
}

/// Type groups, shortest name first within each group.
pub type TypeLengthSorter<L, O> = GroupedSorter<L, O, DisplayLengthField>;

/// Type groups, alphabetical within each group.
pub type TypeAlphabeticSorter<L, O> = GroupedSorter<L, O, AlphabeticField>;

/// Shortest name first.
pub type LengthSorter<L> = FlatSorter<L, DisplayLengthField>;

/// Alphabetical by name.
pub type AlphabeticSorter<L> = FlatSorter<L, AlphabeticField>;
