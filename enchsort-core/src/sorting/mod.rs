//! Sorting module for enchantment lore ordering
//!
//! This module provides:
//! - The generic grouped stable ordering the sorters are built on
//! - Field marker types for within-group keys
//! - The `EnchantmentSorter` trait and its four implementations
//! - Sorter selection from display options

pub mod fields;
pub mod grouped;
pub mod options;
pub mod order;
pub mod sorters;
pub mod traits;
pub mod utils;


pub use fields::*;
pub use grouped::*;
pub use options::*;
pub use order::*;
pub use sorters::*;
pub use traits::*;
