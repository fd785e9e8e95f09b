//! Patch type for partial overrides
//!
//! All fields optional; unset fields keep the preset value.

use super::msu_config::{MsuConfig, OracleLimits};
use crate::features::msu_discovery::domain::scoring::ScoringFormula;
use serde::{Deserialize, Deserializer, Serialize};

/// Patch type for MsuConfig (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MsuConfigPatch {
    /// Absent = keep, `null` = unbounded, number = explicit bound
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_key_size: Option<Option<usize>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringFormula>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pruning: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_merges: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interrupt_check_interval: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle: Option<OracleLimits>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl MsuConfigPatch {
    /// Patch that reproduces `config` exactly
    pub fn from_config(config: &MsuConfig) -> Self {
        Self {
            max_key_size: Some(config.max_key_size),
            scoring: Some(config.scoring),
            pruning: Some(config.pruning),
            verify_merges: Some(config.verify_merges),
            interrupt_check_interval: Some(config.interrupt_check_interval),
            oracle: Some(config.oracle),
        }
    }

    /// Apply onto a base configuration
    pub fn apply(self, mut base: MsuConfig) -> MsuConfig {
        if let Some(v) = self.max_key_size {
            base.max_key_size = v;
        }
        if let Some(v) = self.scoring {
            base.scoring = v;
        }
        if let Some(v) = self.pruning {
            base.pruning = v;
        }
        if let Some(v) = self.verify_merges {
            base.verify_merges = v;
        }
        if let Some(v) = self.interrupt_check_interval {
            base.interrupt_check_interval = v;
        }
        if let Some(v) = self.oracle {
            base.oracle = v;
        }
        base
    }
}
