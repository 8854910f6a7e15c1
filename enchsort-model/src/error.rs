use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidKey(String),
    InvalidType(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidKey(msg) => {
                write!(f, "invalid enchantment key: {msg}")
            }
            ModelError::InvalidType(msg) => {
                write!(f, "invalid enchantment type: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Failure reported by an [`EnchantmentLookup`](crate::EnchantmentLookup)
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The lookup has no metadata for this enchantment.
    Unknown(String),
    /// The backing store could not answer right now.
    Unavailable(String),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Unknown(key) => {
                write!(f, "no metadata for enchantment {key}")
            }
            LookupError::Unavailable(msg) => {
                write!(f, "enchantment metadata unavailable: {msg}")
            }
        }
    }
}

impl std::error::Error for LookupError {}

pub type Result<T> = std::result::Result<T, ModelError>;
