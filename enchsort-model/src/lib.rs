//! Core data model definitions shared across enchsort crates.
#![allow(missing_docs)]

pub mod enchantment_type;
pub mod entry;
pub mod error;
pub mod ids;
pub mod lookup;

pub use enchantment_type::EnchantmentType;
pub use entry::EnchantmentEntry;
pub use error::{LookupError, ModelError, Result as ModelResult};
pub use ids::{DEFAULT_NAMESPACE, EnchantmentKey};
pub use lookup::{CategoryOrder, EnchantmentLookup};
