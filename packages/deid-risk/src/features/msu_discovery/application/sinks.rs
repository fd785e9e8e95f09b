//! Result sink variants
//!
//! - [`EnumerationSink`]: keeps every MSU
//! - [`ListenerSink`]: forwards (row, key size) to a callback
//! - [`StatisticsSink`]: aggregates scores and size histograms
//! - [`ThresholdSink`]: stops the search at the first MSU

use super::statistics::MsuStatistics;
use crate::features::msu_discovery::domain::{Item, ItemSet, ScoreTable, ScoringFormula};
use crate::features::msu_discovery::ports::{ResultSink, SinkControl};

/// Collects every discovered MSU verbatim
#[derive(Debug, Default, Clone)]
pub struct EnumerationSink {
    sets: Vec<ItemSet>,
}

impl EnumerationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sets(&self) -> &[ItemSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// MSUs in discovery order
    pub fn into_sets(self) -> Vec<ItemSet> {
        self.sets
    }

    /// MSUs shortest first, then by items
    pub fn into_sorted(mut self) -> Vec<ItemSet> {
        self.sets.sort();
        self.sets
    }
}

impl ResultSink for EnumerationSink {
    fn register_set(&mut self, set: &ItemSet) -> SinkControl {
        self.sets.push(set.clone());
        SinkControl::Continue
    }
}

/// Calls `callback(row, key_size)` per MSU; stores nothing
pub struct ListenerSink<F>
where
    F: FnMut(u32, usize),
{
    callback: F,
}

impl<F> ListenerSink<F>
where
    F: FnMut(u32, usize),
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ResultSink for ListenerSink<F>
where
    F: FnMut(u32, usize),
{
    fn register_item(&mut self, item: &Item) -> SinkControl {
        if let Some(row) = item.rows().first() {
            (self.callback)(row, 1);
        }
        SinkControl::Continue
    }

    fn register_merged(&mut self, _reference: &Item, candidate: &ItemSet) -> SinkControl {
        if let Some(row) = candidate.row() {
            (self.callback)(row, candidate.len() + 1);
        }
        SinkControl::Continue
    }

    fn register_set(&mut self, set: &ItemSet) -> SinkControl {
        if let Some(row) = set.row() {
            (self.callback)(row, set.len());
        }
        SinkControl::Continue
    }
}

/// Accumulates per-column scores and key-size totals
#[derive(Debug, Clone)]
pub struct StatisticsSink {
    scores: ScoreTable,
    stats: MsuStatistics,
}

impl StatisticsSink {
    pub fn new(formula: ScoringFormula, num_columns: usize, max_key_size: usize) -> Self {
        Self {
            scores: ScoreTable::new(formula, num_columns, max_key_size),
            stats: MsuStatistics::empty(formula, num_columns, max_key_size),
        }
    }

    pub fn score_table(&self) -> &ScoreTable {
        &self.scores
    }

    pub fn finish(self) -> MsuStatistics {
        self.stats
    }

    fn record(&mut self, size: usize, columns: impl Iterator<Item = u32>) {
        let score = self.scores.score(size);
        let stats = &mut self.stats;

        stats.key_count += 1;
        stats.total_key_size += size as u64;
        stats.total_score += score;
        if stats.size_histogram.len() < size {
            stats.size_histogram.resize(size, 0);
        }
        stats.size_histogram[size - 1] += 1;

        for column in columns {
            let c = column as usize;
            if c < stats.num_columns {
                stats.column_scores[c] += score;
                stats.column_key_counts[c] += 1;
                stats.column_key_sizes[c] += size as u64;
            }
        }
    }
}

impl ResultSink for StatisticsSink {
    fn register_item(&mut self, item: &Item) -> SinkControl {
        self.record(1, std::iter::once(item.column()));
        SinkControl::Continue
    }

    fn register_merged(&mut self, reference: &Item, candidate: &ItemSet) -> SinkControl {
        self.record(
            candidate.len() + 1,
            candidate.columns().chain(std::iter::once(reference.column())),
        );
        SinkControl::Continue
    }

    fn register_set(&mut self, set: &ItemSet) -> SinkControl {
        if !set.is_empty() {
            self.record(set.len(), set.columns());
        }
        SinkControl::Continue
    }
}

/// Existence query: stops at the first MSU
#[derive(Debug, Default, Clone)]
pub struct ThresholdSink {
    found: Option<ItemSet>,
}

impl ThresholdSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }

    /// The MSU that triggered the stop
    pub fn found(&self) -> Option<&ItemSet> {
        self.found.as_ref()
    }
}

impl ResultSink for ThresholdSink {
    fn register_set(&mut self, set: &ItemSet) -> SinkControl {
        self.found = Some(set.clone());
        SinkControl::Stop
    }
}
