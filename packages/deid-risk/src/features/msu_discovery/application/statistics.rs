//! Aggregated MSU statistics
//!
//! Produced by [`StatisticsSink`](super::sinks::StatisticsSink). No individual
//! key is stored; only running totals per column and per key size.

use crate::features::msu_discovery::domain::ScoringFormula;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsuStatistics {
    pub formula: ScoringFormula,
    pub num_columns: usize,
    pub max_key_size: usize,

    /// Number of MSUs registered
    pub key_count: u64,
    /// Sum of MSU sizes
    pub total_key_size: u64,
    /// Sum of per-MSU scores
    pub total_score: f64,

    /// Per column: sum of scores of the MSUs containing it
    pub column_scores: Vec<f64>,
    /// Per column: number of MSUs containing it
    pub column_key_counts: Vec<u64>,
    /// Per column: sum of sizes of the MSUs containing it
    pub column_key_sizes: Vec<u64>,

    /// Index `k - 1` counts MSUs of size k
    pub size_histogram: Vec<u64>,
}

impl MsuStatistics {
    pub fn empty(formula: ScoringFormula, num_columns: usize, max_key_size: usize) -> Self {
        Self {
            formula,
            num_columns,
            max_key_size,
            key_count: 0,
            total_key_size: 0,
            total_score: 0.0,
            column_scores: vec![0.0; num_columns],
            column_key_counts: vec![0; num_columns],
            column_key_sizes: vec![0; num_columns],
            size_histogram: vec![0; max_key_size],
        }
    }

    /// Largest MSU size observed (0 when none)
    pub fn max_observed_key_size(&self) -> usize {
        self.size_histogram
            .iter()
            .rposition(|&count| count > 0)
            .map_or(0, |i| i + 1)
    }

    pub fn average_key_size(&self) -> f64 {
        if self.key_count == 0 {
            return 0.0;
        }
        self.total_key_size as f64 / self.key_count as f64
    }

    /// Average size of the MSUs containing `column`
    pub fn column_average_key_size(&self, column: usize) -> f64 {
        match self.column_key_counts.get(column) {
            Some(&count) if count > 0 => self.column_key_sizes[column] as f64 / count as f64,
            _ => 0.0,
        }
    }

    /// Column score relative to the total MSU score
    ///
    /// An MSU spanning several columns counts fully towards each, so the
    /// values may sum to more than 1.
    pub fn column_contributions(&self) -> Vec<f64> {
        self.column_scores
            .iter()
            .map(|&score| {
                if self.total_score > 0.0 {
                    score / self.total_score
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Fraction of MSUs per key size (index `k - 1`)
    pub fn size_distribution(&self) -> Vec<f64> {
        self.size_histogram
            .iter()
            .map(|&count| {
                if self.key_count > 0 {
                    count as f64 / self.key_count as f64
                } else {
                    0.0
                }
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
