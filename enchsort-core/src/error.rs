//! Error types for sorting and configuration.

use enchsort_model::LookupError;
use thiserror::Error;

/// Errors raised while ordering enchantments.
#[derive(Error, Debug)]
pub enum SortError {
    /// The metadata lookup could not answer for an item.
    #[error("Metadata lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// The category list repeats the value at `position`.
    #[error("Category at position {position} appears more than once")]
    DuplicateCategory {
        /// Index of the second occurrence.
        position: usize,
    },
}

/// Result alias for sorting operations.
pub type Result<T> = std::result::Result<T, SortError>;

/// Validation failures for a loaded [`SortConfig`](crate::config::SortConfig).
///
/// Malformed type names are rejected while deserializing, before these
/// checks run.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No types were listed.
    #[error("type list is empty")]
    EmptyTypeList,
    /// A type appears twice once names are normalized.
    #[error("type '{name}' is listed more than once")]
    DuplicateType {
        /// Normalized name of the repeated type.
        name: String,
    },
}
