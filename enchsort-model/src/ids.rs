use crate::error::{ModelError, Result};
use std::fmt;

/// Namespace assumed when a key is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

fn valid_segment(segment: &str, allow_slash: bool) -> bool {
    !segment.is_empty()
        && segment.chars().all(|c| {
            c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || matches!(c, '_' | '-' | '.')
                || (allow_slash && c == '/')
        })
}

/// Namespaced enchantment identifier, e.g. `minecraft:sharpness`.
///
/// Keys are normalized to lowercase and always carry a namespace, so
/// `Sharpness` and `minecraft:sharpness` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct EnchantmentKey {
    namespace: String,
    key: String,
}

impl EnchantmentKey {
    /// Parse `namespace:key` or a bare `key`.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref().trim().to_ascii_lowercase();
        let (namespace, key) = match raw.split_once(':') {
            Some((namespace, key)) => (namespace, key),
            None => (DEFAULT_NAMESPACE, raw.as_str()),
        };

        if !valid_segment(namespace, false) {
            return Err(ModelError::InvalidKey(format!(
                "bad namespace in '{raw}'"
            )));
        }
        if !valid_segment(key, true) {
            return Err(ModelError::InvalidKey(format!("bad key in '{raw}'")));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            key: key.to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for EnchantmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl std::str::FromStr for EnchantmentKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for EnchantmentKey {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<EnchantmentKey> for String {
    fn from(value: EnchantmentKey) -> Self {
        value.to_string()
    }
}
