//! Utility functions for sorting operations
//!
//! Helpers for applying a computed ordering back onto the caller's
//! collection.

/// Replace the contents of `items` with the elements at `indices`, in that
/// order.
///
/// Elements whose index is not listed are dropped. Each index must appear at
/// most once; a repeated index would have nothing left to move and is
/// skipped.
pub fn take_by_indices<T>(items: &mut Vec<T>, indices: &[usize]) {
    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();

    items.reserve(indices.len());
    for &idx in indices {
        debug_assert!(idx < slots.len(), "Index out of bounds");
        if let Some(item) = slots.get_mut(idx).and_then(Option::take) {
            items.push(item);
        }
    }
}
