use crate::error::{ModelError, Result};
use std::fmt::{self, Display, Formatter};

/// Display grouping for an enchantment (`normal`, `curse`, ...).
///
/// Types are defined by the embedding plugin at runtime, so this is an open
/// newtype rather than a closed enum. Names are trimmed and lowercased; the
/// order types appear in is supplied separately through
/// [`CategoryOrder`](crate::CategoryOrder).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct EnchantmentType(String);

impl EnchantmentType {
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ModelError::InvalidType("empty type name".to_string()));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ModelError::InvalidType(format!(
                "type name '{name}' contains whitespace"
            )));
        }
        Ok(Self(name.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EnchantmentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EnchantmentType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EnchantmentType {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<EnchantmentType> for String {
    fn from(value: EnchantmentType) -> Self {
        value.0
    }
}
