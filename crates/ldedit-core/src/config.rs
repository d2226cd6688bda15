//! Configuration structures for ldedit-core.
//!
//! Configuration is explicit and serializable. The core crate never reads
//! environment variables or files; the host (CLI, UI) builds an
//! [`EditorConfig`] and hands it to the session.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::defaults;
use crate::errors::{LdError, LdResult};

/// Editor configuration root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Type selected at session start. Also the fallback when an imported
    /// document names a type the catalog does not know.
    #[serde(default = "EditorConfig::default_type")]
    pub default_type: String,

    #[serde(default)]
    pub limits: LimitsConfig,
}

impl EditorConfig {
    fn default_type() -> String {
        defaults::TYPE.to_string()
    }

    pub fn with_default_type(mut self, type_name: impl Into<String>) -> Self {
        self.default_type = type_name.into();
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_type: Self::default_type(),
            limits: LimitsConfig::default(),
        }
    }
}

/// Size limits for text entering the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum bytes accepted by an import.
    #[serde(default = "LimitsConfig::default_max_bytes")]
    pub max_import_bytes: usize,

    /// Maximum bytes accepted by a raw-text edit.
    #[serde(default = "LimitsConfig::default_max_bytes")]
    pub max_raw_text_bytes: usize,
}

impl LimitsConfig {
    fn default_max_bytes() -> usize {
        defaults::MAX_TEXT_BYTES
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_import_bytes: Self::default_max_bytes(),
            max_raw_text_bytes: Self::default_max_bytes(),
        }
    }
}

/// Validate a configuration on its own.
pub fn validate_config(cfg: &EditorConfig) -> LdResult<()> {
    if cfg.default_type.trim().is_empty() {
        return Err(LdError::invalid_argument("default_type must not be empty"));
    }

    if cfg.limits.max_import_bytes == 0 {
        return Err(LdError::invalid_argument(
            "max_import_bytes must be greater than zero",
        ));
    }

    if cfg.limits.max_raw_text_bytes == 0 {
        return Err(LdError::invalid_argument(
            "max_raw_text_bytes must be greater than zero",
        ));
    }

    Ok(())
}

/// Validate a configuration against the catalog it will be used with.
pub fn validate_config_for(cfg: &EditorConfig, catalog: &Catalog) -> LdResult<()> {
    validate_config(cfg)?;
    if !catalog.contains(&cfg.default_type) {
        return Err(LdError::unknown_type(cfg.default_type.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = EditorConfig::default();
        validate_config(&cfg).unwrap();
        validate_config_for(&cfg, &Catalog::builtin()).unwrap();
        assert_eq!(cfg.default_type, "Person");
    }

    #[test]
    fn empty_default_type_detected() {
        let cfg = EditorConfig::default().with_default_type("  ");
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn zero_limits_detected() {
        let mut cfg = EditorConfig::default();
        cfg.limits.max_import_bytes = 0;
        assert!(validate_config(&cfg).is_err());

        let mut cfg = EditorConfig::default();
        cfg.limits.max_raw_text_bytes = 0;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn default_type_must_exist_in_catalog() {
        let cfg = EditorConfig::default().with_default_type("Thing");
        let err = validate_config_for(&cfg, &Catalog::builtin()).unwrap_err();
        assert_eq!(err, LdError::unknown_type("Thing"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: EditorConfig = serde_json::from_str(r#"{"limits":{}}"#).unwrap();
        assert_eq!(cfg, EditorConfig::default());
    }
}
