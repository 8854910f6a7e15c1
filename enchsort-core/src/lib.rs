//! # enchsort core
//!
//! Ordering of enchantment lore lines for an enchantment display plugin.
//!
//! ## Overview
//!
//! - **Grouped ordering**: [`sorting::grouped_order`] buckets items by
//!   category in a caller-supplied order and stable-sorts each bucket by an
//!   extracted key. Items whose category is not listed are left out.
//! - **Sorters**: [`sorting::EnchantmentSorter`] and its implementations
//!   (type/length, type/alphabetic, length, alphabetic), built on an injected
//!   [`EnchantmentLookup`](enchsort_model::EnchantmentLookup) and
//!   [`CategoryOrder`](enchsort_model::CategoryOrder).
//! - **Catalog**: [`catalog::EnchantmentCatalog`], a map-backed lookup.
//! - **Configuration**: [`config::SortConfig`], loaded from TOML or JSON.
//!
//! ## Examples
//!
//! ```
//! use enchsort_core::{catalog::EnchantmentCatalog, sorting::*};
//! use enchsort_model::{EnchantmentEntry, EnchantmentKey, EnchantmentType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let normal = EnchantmentType::new("normal")?;
//! let curse = EnchantmentType::new("curse")?;
//!
//! let mut catalog = EnchantmentCatalog::new();
//! for (key, ty, name) in [
//!     ("sharpness", &normal, "Sharpness"),
//!     ("vanishing_curse", &curse, "Curse of Vanishing"),
//!     ("mending", &normal, "Mending"),
//! ] {
//!     catalog.insert(
//!         EnchantmentKey::new(key)?,
//!         EnchantmentEntry::new(ty.clone(), name),
//!     );
//! }
//!
//! let order = TypeOrder::new(vec![normal, curse])?;
//! let sorter = TypeLengthSorter::new(&catalog, &order);
//!
//! let mut lore = vec![
//!     EnchantmentKey::new("vanishing_curse")?,
//!     EnchantmentKey::new("sharpness")?,
//!     EnchantmentKey::new("mending")?,
//! ];
//! sorter.sort_enchantments(&mut lore)?;
//!
//! let keys: Vec<String> = lore.iter().map(|k| k.key().to_string()).collect();
//! assert_eq!(keys, ["mending", "sharpness", "vanishing_curse"]);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod sorting;

pub use catalog::EnchantmentCatalog;
pub use config::{SortConfig, SortConfigSource};
pub use error::{ConfigError, Result, SortError};
pub use sorting::{EnchantmentSorter, SortOptions, TypeOrder, sorter_for};
