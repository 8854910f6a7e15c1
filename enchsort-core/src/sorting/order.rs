//! Owned category order for the type-grouped sorters.

use crate::error::{Result, SortError};
use enchsort_model::{CategoryOrder, EnchantmentType};
use std::collections::HashSet;

/// Owned, duplicate-free list of enchantment types in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeOrder {
    types: Vec<EnchantmentType>,
}

impl TypeOrder {
    /// Build an order, rejecting repeated types.
    pub fn new(types: Vec<EnchantmentType>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(types.len());
        for (position, ty) in types.iter().enumerate() {
            if !seen.insert(ty) {
                return Err(SortError::DuplicateCategory { position });
            }
        }
        Ok(Self { types })
    }

    /// Wrap a list already checked for duplicates.
    pub(crate) fn from_unique(types: Vec<EnchantmentType>) -> Self {
        debug_assert!(Self::new(types.clone()).is_ok());
        Self { types }
    }

    /// Position of `ty` in display order, if listed.
    pub fn position(&self, ty: &EnchantmentType) -> Option<usize> {
        self.types.iter().position(|t| t == ty)
    }

    /// Number of listed types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True when no types are listed.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Types in display order.
    pub fn iter(&self) -> impl Iterator<Item = &EnchantmentType> {
        self.types.iter()
    }
}

impl CategoryOrder for TypeOrder {
    fn ordered_types(&self) -> &[EnchantmentType] {
        &self.types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(name: &str) -> EnchantmentType {
        EnchantmentType::new(name).unwrap()
    }

    #[test]
    fn keeps_given_order() {
        let order =
            TypeOrder::new(vec![ty("special"), ty("normal"), ty("curse")])
                .unwrap();
        assert_eq!(order.position(&ty("normal")), Some(1));
        assert_eq!(order.position(&ty("spell")), None);
        assert_eq!(order.ordered_types()[0], ty("special"));
    }

    #[test]
    fn rejects_duplicates() {
        let err = TypeOrder::new(vec![ty("normal"), ty("curse"), ty("NORMAL")])
            .unwrap_err();
        assert!(matches!(err, SortError::DuplicateCategory { position: 2 }));
    }
}
