//! Common test utilities for deid-risk
//!
//! Shared fixtures, assertions and builders for the integration tests.

mod assertions;
mod builders;
mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
