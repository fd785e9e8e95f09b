//! Search outcome and statistics

use serde::{Deserialize, Serialize};

/// How a search run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// Every branch explored
    Completed,

    /// Interrupt flag observed; reported MSUs are a valid partial result
    Cancelled,

    /// The sink asked to stop after a registration
    ThresholdReached,
}

/// Counters gathered during one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Item indexes built (one per sub-table)
    pub sub_problems: usize,
    pub pruned_branches: usize,
    /// Candidates failing the rank check
    pub rank_rejections: usize,
    /// Candidates without a witness row outside the reference item
    pub witness_rejections: usize,
    pub msus_reported: usize,
    pub max_depth: usize,
    pub duration_ms: f64,
}

/// Result of a search run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub max_key_size: usize,
    pub stats: SearchStats,
}

impl SearchOutcome {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status == SearchStatus::Completed
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.status == SearchStatus::Cancelled
    }
}
