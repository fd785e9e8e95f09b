//! Configuration System
//!
//! Two tiers, same as the rest of the crate's API surface:
//! - Level 1: Preset - simple one-liner
//! - Level 2: Builder setters or a YAML file with partial overrides
//!
//! # Examples
//!
//! ```rust,ignore
//! use deid_risk::config::{MsuConfig, Preset};
//!
//! // Level 1: preset
//! let config = MsuConfig::from_preset(Preset::Fast);
//!
//! // Level 2: override a field
//! let config = MsuConfig::from_preset(Preset::Balanced).max_key_size(Some(4));
//!
//! // Level 2: YAML
//! let config = MsuConfig::from_yaml("risk.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod msu_config;
pub mod patch;
pub mod preset;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use msu_config::{MsuConfig, OracleLimits, MAX_KEY_SIZE_LIMIT};
pub use patch::MsuConfigPatch;
pub use preset::Preset;
