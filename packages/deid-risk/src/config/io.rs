//! Configuration I/O (YAML loading)
//!
//! Versioned envelope: `version`, base `preset`, optional `overrides`.

use super::error::{ConfigError, ConfigResult};
use super::msu_config::MsuConfig;
use super::patch::MsuConfigPatch;
use super::preset::Preset;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<MsuConfigPatch>,
}

impl MsuConfig {
    /// Load and validate a configuration from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a configuration from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset: Preset = export.preset.parse()?;

        let base = MsuConfig::from_preset(preset);
        let config = match export.overrides {
            Some(patch) => patch.apply(base),
            None => base,
        };

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML (custom preset + full overrides)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: Preset::Custom.to_string(),
            overrides: Some(MsuConfigPatch::from_config(self)),
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}
