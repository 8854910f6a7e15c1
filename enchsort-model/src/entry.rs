use crate::enchantment_type::EnchantmentType;

/// Display metadata the lookup holds for one enchantment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnchantmentEntry {
    pub enchantment_type: EnchantmentType,
    /// Display name without colour codes or level numerals.
    pub raw_name: String,
}

impl EnchantmentEntry {
    pub fn new(
        enchantment_type: EnchantmentType,
        raw_name: impl Into<String>,
    ) -> Self {
        Self {
            enchantment_type,
            raw_name: raw_name.into(),
        }
    }

    /// Length of the raw name in UTF-16 code units, the unit lore lines are
    /// measured in by the client.
    pub fn display_length(&self) -> usize {
        self.raw_name.encode_utf16().count()
    }
}
