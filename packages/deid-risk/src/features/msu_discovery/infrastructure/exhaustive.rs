//! Exhaustive baseline
//!
//! Brute-force MSU discovery used as a correctness oracle for SUDA2:
//!
//! 1. For every row, enumerate every non-empty subset of its items
//!    (up to the max key size) and count occurrences across rows.
//! 2. Keep subsets seen exactly once.
//! 3. Drop any kept subset that has a kept proper subset.
//!
//! Cost is `rows · 2^columns`, so construction refuses inputs beyond
//! [`OracleLimits`].

use super::interrupt::InterruptFlag;
use crate::config::OracleLimits;
use crate::errors::{Result, RiskError};
use crate::features::msu_discovery::domain::{
    EncodedMatrix, ItemId, ItemSet, SearchOutcome, SearchStats, SearchStatus,
};
use crate::features::msu_discovery::ports::{ResultSink, SinkControl};
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::{debug, info};

/// Occurrence count and first row of one item combination
#[derive(Debug, Clone, Copy)]
struct Occurrence {
    count: u32,
    row: u32,
}

pub struct ExhaustiveSearch<'a> {
    matrix: &'a EncodedMatrix,
    interrupt: InterruptFlag,
}

impl<'a> ExhaustiveSearch<'a> {
    /// Refuses matrices larger than `limits`
    pub fn new(
        matrix: &'a EncodedMatrix,
        limits: &OracleLimits,
        interrupt: InterruptFlag,
    ) -> Result<Self> {
        limits.validate()?;
        if matrix.num_columns() > limits.max_columns || matrix.num_rows() > limits.max_rows {
            return Err(RiskError::OracleLimit {
                rows: matrix.num_rows(),
                columns: matrix.num_columns(),
                max_rows: limits.max_rows,
                max_columns: limits.max_columns,
            });
        }
        Ok(Self { matrix, interrupt })
    }

    /// Report every MSU of size `<= max_key_size`, shortest first
    pub fn run<S: ResultSink + ?Sized>(
        &self,
        max_key_size: usize,
        sink: &mut S,
    ) -> Result<SearchOutcome> {
        let started = Instant::now();
        let mut stats = SearchStats::default();
        let finish = |status: SearchStatus, max_key_size: usize, mut stats: SearchStats| {
            stats.duration_ms = started.elapsed().as_secs_f64() * 1000.0;
            SearchOutcome {
                status,
                max_key_size,
                stats,
            }
        };

        if self.interrupt.is_interrupted() {
            debug!("Exhaustive search cancelled before start");
            return Ok(finish(SearchStatus::Cancelled, 0, stats));
        }
        if max_key_size == 0 {
            return Err(RiskError::invalid_input("max key size must be at least 1"));
        }

        let columns = self.matrix.num_columns();
        let max_k = max_key_size.min(columns);
        info!(
            rows = self.matrix.num_rows(),
            columns,
            max_key_size = max_k,
            "Exhaustive search started"
        );

        let masks: Vec<u32> = (1u32..(1u32 << columns))
            .filter(|mask| mask.count_ones() as usize <= max_k)
            .collect();

        let mut occurrences: FxHashMap<Vec<ItemId>, Occurrence> = FxHashMap::default();
        for (row_index, row) in self.matrix.rows().enumerate() {
            if self.interrupt.is_interrupted() {
                return Ok(finish(SearchStatus::Cancelled, max_k, stats));
            }
            for &mask in &masks {
                let key = subset_of_row(row, mask);
                occurrences
                    .entry(key)
                    .and_modify(|o| o.count += 1)
                    .or_insert(Occurrence {
                        count: 1,
                        row: row_index as u32,
                    });
            }
        }

        let uniques: FxHashMap<Vec<ItemId>, u32> = occurrences
            .into_iter()
            .filter(|(_, o)| o.count == 1)
            .map(|(key, o)| (key, o.row))
            .collect();

        let mut minimal: Vec<ItemSet> = uniques
            .iter()
            .filter(|(key, _)| !has_unique_proper_subset(key, &uniques))
            .map(|(key, &row)| ItemSet::new(key.iter().copied()).with_row(row))
            .collect();
        minimal.sort();
        stats.sub_problems = 1;

        for set in &minimal {
            stats.msus_reported += 1;
            if sink.register_set(set) == SinkControl::Stop {
                return Ok(finish(SearchStatus::ThresholdReached, max_k, stats));
            }
        }

        let outcome = finish(SearchStatus::Completed, max_k, stats);
        info!(
            msus = outcome.stats.msus_reported,
            duration_ms = outcome.stats.duration_ms,
            "Exhaustive search finished"
        );
        Ok(outcome)
    }
}

/// Items of `row` selected by the bits of `mask`, in column order
fn subset_of_row(row: &[u32], mask: u32) -> Vec<ItemId> {
    row.iter()
        .enumerate()
        .filter(|(column, _)| mask & (1u32 << *column) != 0)
        .map(|(column, &value)| ItemId::new(column as u32, value))
        .collect()
}

fn has_unique_proper_subset(key: &[ItemId], uniques: &FxHashMap<Vec<ItemId>, u32>) -> bool {
    let full: u32 = (1u32 << key.len()) - 1;
    let mut buffer = Vec::with_capacity(key.len());
    // Non-empty proper sub-masks of `full`
    let mut sub = (full - 1) & full;
    while sub > 0 {
        buffer.clear();
        buffer.extend(
            key.iter()
                .enumerate()
                .filter(|(i, _)| sub & (1u32 << *i) != 0)
                .map(|(_, &id)| id),
        );
        if uniques.contains_key(&buffer) {
            return true;
        }
        sub = (sub - 1) & full;
    }
    false
}
