//! Grouped stable ordering
//!
//! Items are bucketed by category in a single scan, each bucket is sorted
//! by an extracted key, and buckets are concatenated in the caller's
//! category order. Both sorts are stable: items that tie on category and
//! key keep their input order.

use super::utils::take_by_indices;
use crate::error::{Result, SortError};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, trace};

/// Compute the grouped ordering of `items` as a list of input positions.
///
/// Items whose category is not in `categories` are left out of the result.
/// Keys are only extracted for items that land in a bucket. When
/// `categories` is empty neither accessor is called and the result is
/// empty.
///
/// Fails with [`SortError::DuplicateCategory`] before touching any item if
/// a category repeats, and with whatever error an accessor returns.
pub fn grouped_order<T, C, K, FC, FK>(
    items: &[T],
    categories: &[C],
    mut category_of: FC,
    mut key_of: FK,
) -> Result<Vec<usize>>
where
    C: Eq + Hash,
    K: Ord,
    FC: FnMut(&T) -> Result<C>,
    FK: FnMut(&T) -> Result<K>,
{
    if categories.is_empty() {
        return Ok(Vec::new());
    }

    let mut slot_of: HashMap<&C, usize> =
        HashMap::with_capacity(categories.len());
    for (position, category) in categories.iter().enumerate() {
        if slot_of.insert(category, position).is_some() {
            return Err(SortError::DuplicateCategory { position });
        }
    }

    let mut buckets: Vec<Vec<(K, usize)>> =
        categories.iter().map(|_| Vec::new()).collect();
    let mut dropped = 0usize;

    for (idx, item) in items.iter().enumerate() {
        let category = category_of(item)?;
        match slot_of.get(&category) {
            Some(&slot) => buckets[slot].push((key_of(item)?, idx)),
            None => {
                trace!("item at position {} has no listed category", idx);
                dropped += 1;
            }
        }
    }

    let mut order = Vec::with_capacity(items.len() - dropped);
    for mut bucket in buckets {
        // `sort_by` is stable; ties stay in scan order.
        bucket.sort_by(|a, b| a.0.cmp(&b.0));
        order.extend(bucket.into_iter().map(|(_, idx)| idx));
    }

    debug!(
        "Grouped sort: in={}, out={}, dropped={}, categories={}",
        items.len(),
        order.len(),
        dropped,
        categories.len()
    );

    Ok(order)
}

/// Compute a flat stable ordering of `items` by an extracted key.
pub fn keyed_order<T, K, FK>(items: &[T], mut key_of: FK) -> Result<Vec<usize>>
where
    K: Ord,
    FK: FnMut(&T) -> Result<K>,
{
    // Extract keys once for efficiency
    let mut keys = items
        .iter()
        .enumerate()
        .map(|(idx, item)| key_of(item).map(|key| (key, idx)))
        .collect::<Result<Vec<_>>>()?;

    keys.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(keys.into_iter().map(|(_, idx)| idx).collect())
}

/// Return a new vector with `items` grouped by category and ordered by key
/// within each group.
pub fn sort_grouped<T, C, K, FC, FK>(
    items: &[T],
    categories: &[C],
    category_of: FC,
    key_of: FK,
) -> Result<Vec<T>>
where
    T: Clone,
    C: Eq + Hash,
    K: Ord,
    FC: FnMut(&T) -> Result<C>,
    FK: FnMut(&T) -> Result<K>,
{
    let order = grouped_order(items, categories, category_of, key_of)?;
    Ok(order.into_iter().map(|idx| items[idx].clone()).collect())
}

/// Replace the contents of `items` with their grouped ordering.
///
/// The ordering is computed before anything moves, so on error `items` is
/// left exactly as it was.
pub fn sort_grouped_in_place<T, C, K, FC, FK>(
    items: &mut Vec<T>,
    categories: &[C],
    category_of: FC,
    key_of: FK,
) -> Result<()>
where
    C: Eq + Hash,
    K: Ord,
    FC: FnMut(&T) -> Result<C>,
    FK: FnMut(&T) -> Result<K>,
{
    let order =
        grouped_order(items.as_slice(), categories, category_of, key_of)?;
    take_by_indices(items, &order);
    Ok(())
}

/// Stable in-place sort of `items` by an extracted key. Nothing is dropped.
pub fn sort_keyed_in_place<T, K, FK>(items: &mut Vec<T>, key_of: FK) -> Result<()>
where
    K: Ord,
    FK: FnMut(&T) -> Result<K>,
{
    let order = keyed_order(items.as_slice(), key_of)?;
    take_by_indices(items, &order);
    Ok(())
}
