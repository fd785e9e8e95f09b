//! MSU search configuration
//!
//! Controls the SUDA2 key-size bound, score formula, pruning, merge
//! verification, cancellation polling, and the size gate for the exhaustive
//! baseline.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use crate::features::msu_discovery::domain::scoring::ScoringFormula;
use serde::{Deserialize, Serialize};

/// Largest accepted explicit key size
pub const MAX_KEY_SIZE_LIMIT: usize = 64;

/// Size gate for the exhaustive baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleLimits {
    /// Power-set enumeration is 2^columns per row
    pub max_columns: usize,

    pub max_rows: usize,
}

impl OracleLimits {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_columns == 0 || self.max_columns > 20 {
            return Err(ConfigError::range_with_hint(
                "oracle.max_columns",
                self.max_columns,
                1,
                20,
                "Exhaustive search enumerates 2^columns subsets per row",
            ));
        }
        if self.max_rows == 0 || self.max_rows > 100_000 {
            return Err(ConfigError::range_with_hint(
                "oracle.max_rows",
                self.max_rows,
                1,
                100_000,
                "Exhaustive search is meant for small fixtures",
            ));
        }
        Ok(())
    }
}

impl Default for OracleLimits {
    fn default() -> Self {
        Self {
            max_columns: 12,
            max_rows: 10_000,
        }
    }
}

/// MSU discovery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsuConfig {
    /// Largest key size searched (None = number of columns)
    pub max_key_size: Option<usize>,

    /// Weighting used by the statistics sink
    pub scoring: ScoringFormula,

    /// Apply the support and candidate-count bounds
    pub pruning: bool,

    /// Re-count the support of every merged key
    pub verify_merges: bool,

    /// Rows scanned between two interrupt polls
    pub interrupt_check_interval: usize,

    /// Exhaustive baseline gate
    pub oracle: OracleLimits,
}

impl MsuConfig {
    /// Create configuration from preset
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                max_key_size: Some(3),
                scoring: ScoringFormula::SdcMicro,
                pruning: true,
                verify_merges: false,
                interrupt_check_interval: 4096,
                oracle: OracleLimits::default(),
            },
            Preset::Balanced | Preset::Custom => Self {
                max_key_size: Some(5),
                scoring: ScoringFormula::SdcMicro,
                pruning: true,
                verify_merges: true,
                interrupt_check_interval: 1024,
                oracle: OracleLimits::default(),
            },
            Preset::Thorough => Self {
                max_key_size: None,
                scoring: ScoringFormula::SdcMicro,
                pruning: true,
                verify_merges: true,
                interrupt_check_interval: 1024,
                oracle: OracleLimits::default(),
            },
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(k) = self.max_key_size {
            if k == 0 || k > MAX_KEY_SIZE_LIMIT {
                return Err(ConfigError::range_with_hint(
                    "max_key_size",
                    k,
                    1,
                    MAX_KEY_SIZE_LIMIT,
                    "Use None to search every key size up to the number of columns",
                ));
            }
        }

        if self.interrupt_check_interval == 0 || self.interrupt_check_interval > 1_000_000 {
            return Err(ConfigError::range_with_hint(
                "interrupt_check_interval",
                self.interrupt_check_interval,
                1,
                1_000_000,
                "Interrupt polling interval is counted in rows",
            ));
        }

        self.oracle.validate()
    }

    /// Key size bound for a table with `columns` attributes
    pub fn effective_max_key_size(&self, columns: usize) -> usize {
        match self.max_key_size {
            Some(k) => k.min(columns),
            None => columns,
        }
    }

    /// Builder: Set max_key_size
    pub fn max_key_size(mut self, v: Option<usize>) -> Self {
        self.max_key_size = v;
        self
    }

    /// Builder: Set scoring
    pub fn scoring(mut self, v: ScoringFormula) -> Self {
        self.scoring = v;
        self
    }

    /// Builder: Set pruning
    pub fn pruning(mut self, v: bool) -> Self {
        self.pruning = v;
        self
    }

    /// Builder: Set verify_merges
    pub fn verify_merges(mut self, v: bool) -> Self {
        self.verify_merges = v;
        self
    }

    /// Builder: Set interrupt_check_interval
    pub fn interrupt_check_interval(mut self, v: usize) -> Self {
        self.interrupt_check_interval = v;
        self
    }

    /// Builder: Set oracle limits
    pub fn oracle(mut self, v: OracleLimits) -> Self {
        self.oracle = v;
        self
    }
}

impl Default for MsuConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}
