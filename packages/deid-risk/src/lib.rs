/*
 * deid-risk - Disclosure Risk Engine
 *
 * Feature-First Hexagonal Architecture:
 * - config/      : Presets, validation, versioned YAML
 * - errors       : Crate-wide error taxonomy
 * - features/    : Vertical slices (msu_discovery)
 *
 * Search:
 * - SUDA2 recursive MSU discovery with support/candidate pruning
 * - Exhaustive baseline for small tables
 * - Cooperative cancellation via a shared interrupt flag
 */

// Crate-level lint configuration
#![allow(clippy::too_many_arguments)] // Recursive search threads several bounds
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::needless_range_loop)] // Range loop for indexing
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration presets and YAML loading
pub mod config;

/// Error types
pub mod errors;

/// Feature modules (vertical slices)
pub mod features;

pub use config::{MsuConfig, Preset};
pub use errors::{Result, RiskError};
pub use features::msu_discovery::{
    EncodedMatrix, InterruptFlag, ItemId, ItemSet, MsuAnalyzer, MsuStatistics, ResultSink,
    SearchOutcome, SearchStatus, SinkControl,
};
