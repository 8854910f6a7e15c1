//! Lore ordering settings.
//!
//! Settings come from a TOML or JSON document. [`SortConfig::load_from_env`]
//! resolves where that document lives; everything else works on strings or
//! paths directly.

use crate::error::ConfigError;
use crate::sorting::{SortOptions, TypeOrder};
use anyhow::{Context, anyhow};
use enchsort_model::EnchantmentType;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Environment variable naming a config file.
pub const CONFIG_PATH_ENV: &str = "ENCHSORT_CONFIG_PATH";
/// Environment variable holding inline JSON config.
pub const CONFIG_JSON_ENV: &str = "ENCHSORT_CONFIG_JSON";

fn default_types() -> Vec<EnchantmentType> {
    ["normal", "special", "artifact", "spell", "curse"]
        .into_iter()
        .filter_map(|name| EnchantmentType::new(name).ok())
        .collect()
}

/// Source that produced the sort configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortConfigSource {
    /// Neither variable was set.
    #[default]
    Default,
    /// Read from the file named by `$ENCHSORT_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// Parsed from `$ENCHSORT_CONFIG_JSON`.
    EnvInline,
}

/// How enchantments are ordered on item lore.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SortConfig {
    /// Group enchantments by type before ordering them.
    pub by_type: bool,
    /// Order by raw name length. When false, order alphabetically.
    pub by_length: bool,
    /// Types in display order. Enchantments of a type missing from this
    /// list are not shown when grouping by type. Names are normalized and
    /// checked as they are deserialized.
    #[serde(default = "default_types")]
    pub types: Vec<EnchantmentType>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            by_type: true,
            by_length: true,
            types: default_types(),
        }
    }
}

impl SortConfig {
    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$ENCHSORT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$ENCHSORT_CONFIG_JSON` (inline JSON),
    /// 3) defaults if neither is set.
    pub fn load_from_env() -> anyhow::Result<(Self, SortConfigSource)> {
        Self::load_from_vars(
            env::var(CONFIG_PATH_ENV).ok(),
            env::var(CONFIG_JSON_ENV).ok(),
        )
    }

    /// Resolution behind [`load_from_env`](Self::load_from_env), taking the
    /// variable values directly.
    pub fn load_from_vars(
        path: Option<String>,
        inline_json: Option<String>,
    ) -> anyhow::Result<(Self, SortConfigSource)> {
        if let Some(path_str) = path
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_file(&path)?;
            debug!("Loaded sort config from {}", path.display());
            return Ok((config, SortConfigSource::EnvPath(path)));
        }

        if let Some(raw) = inline_json
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            debug!("Loaded sort config from {}", CONFIG_JSON_ENV);
            return Ok((parsed, SortConfigSource::EnvInline));
        }

        debug!("Using default sort config");
        Ok((Self::default(), SortConfigSource::Default))
    }

    /// Load from `path`, picking the format from its extension and
    /// sniffing TOML then JSON when there is none.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read sort config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid sort config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                let config: Self = toml::from_str(&contents).map_err(|err| {
                    anyhow!("invalid sort config {}: {}", path.display(), err)
                })?;
                config.validated().with_context(|| {
                    format!("invalid sort config {}", path.display())
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse TOML or JSON. `origin` names the source in error messages.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        let config: Self = toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse sort config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })?;
        config
            .validated()
            .with_context(|| format!("invalid sort config {origin}"))
    }

    fn parse_json(raw: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.validated()?)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.type_order()?;
        Ok(self)
    }

    /// Display options selecting the sorter.
    pub fn options(&self) -> SortOptions {
        SortOptions {
            by_type: self.by_type,
            by_length: self.by_length,
        }
    }

    /// Check [`types`](Self::types) and build a [`TypeOrder`] from it.
    pub fn type_order(&self) -> Result<TypeOrder, ConfigError> {
        if self.types.is_empty() {
            return Err(ConfigError::EmptyTypeList);
        }

        let mut seen = HashSet::with_capacity(self.types.len());
        for ty in &self.types {
            if !seen.insert(ty) {
                return Err(ConfigError::DuplicateType {
                    name: ty.to_string(),
                });
            }
        }

        Ok(TypeOrder::from_unique(self.types.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enchsort_model::CategoryOrder;

    #[test]
    fn defaults_group_by_type_and_length() {
        let config = SortConfig::default();
        assert_eq!(config.options(), SortOptions::default());

        let order = config.type_order().unwrap();
        assert_eq!(order.len(), 5);
        assert_eq!(
            order.position(&EnchantmentType::new("curse").unwrap()),
            Some(4)
        );
    }

    #[test]
    fn parses_toml_with_partial_fields() {
        let config = SortConfig::parse_from_str(
            "by_length = false\ntypes = [\"Curse\", \"Normal\"]\n",
            "inline",
        )
        .unwrap();

        assert!(config.by_type);
        assert!(!config.by_length);
        let order = config.type_order().unwrap();
        assert_eq!(order.ordered_types()[0].as_str(), "curse");
    }

    #[test]
    fn parses_json_when_toml_fails() {
        let config =
            SortConfig::parse_from_str(r#"{"by_type": false}"#, "inline")
                .unwrap();
        assert!(!config.by_type);
        assert_eq!(config.types, default_types());
    }

    #[test]
    fn rejects_duplicate_types_after_normalization() {
        let err = SortConfig::parse_from_str(
            "types = [\"normal\", \"NORMAL\"]",
            "inline",
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::DuplicateType { name }) if name == "normal"
        ));
    }

    #[test]
    fn rejects_empty_type_list() {
        let config = SortConfig {
            types: Vec::new(),
            ..SortConfig::default()
        };
        assert!(matches!(
            config.type_order(),
            Err(ConfigError::EmptyTypeList)
        ));
    }

    #[test]
    fn unparseable_input_reports_both_formats() {
        let err = SortConfig::parse_from_str("by_type = [", "broken").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("toml error"));
        assert!(message.contains("json error"));
    }

    #[test]
    fn vars_fall_back_to_defaults() {
        let (config, source) =
            SortConfig::load_from_vars(Some("  ".into()), None).unwrap();
        assert_eq!(config, SortConfig::default());
        assert_eq!(source, SortConfigSource::Default);
    }

    #[test]
    fn inline_json_var_is_used_without_path() {
        let (config, source) = SortConfig::load_from_vars(
            None,
            Some(r#"{"by_length": false, "types": ["spell"]}"#.into()),
        )
        .unwrap();
        assert!(!config.by_length);
        assert_eq!(config.types, vec![EnchantmentType::new("spell").unwrap()]);
        assert_eq!(source, SortConfigSource::EnvInline);
    }

    #[test]
    fn blank_type_name_fails_to_parse() {
        let err = SortConfig::parse_from_str(
            "types = [\"normal\", \"  \"]",
            "inline",
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to parse sort config"));

        let json = SortConfig::parse_from_str(r#"{"types": ["  "]}"#, "inline");
        assert!(json.is_err());
    }

    #[test]
    fn types_round_trip_as_plain_names() {
        let config = SortConfig {
            types: vec![EnchantmentType::new("Curse").unwrap()],
            ..SortConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""types":["curse"]"#));
    }
}
