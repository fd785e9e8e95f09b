//! High-Level MSU Analyzer
//!
//! Facade used by risk reporting: owns the encoded matrix and configuration,
//! runs SUDA2 (or the exhaustive baseline) and shapes results through a sink.
//!
//! # Usage
//! ```text
//! use deid_risk::config::{MsuConfig, Preset};
//! use deid_risk::features::msu_discovery::{EncodedMatrix, MsuAnalyzer};
//!
//! let matrix = EncodedMatrix::new(vec![vec![1, 2, 3], vec![2, 2, 3], vec![1, 1, 3]])?;
//! let analyzer = MsuAnalyzer::new(matrix, MsuConfig::from_preset(Preset::Thorough))?;
//!
//! let stats = analyzer.statistics()?.value;
//! println!("{:?}", stats.column_contributions());
//! ```

use super::sinks::{EnumerationSink, ListenerSink, StatisticsSink, ThresholdSink};
use super::statistics::MsuStatistics;
use crate::config::MsuConfig;
use crate::errors::Result;
use crate::features::msu_discovery::domain::{EncodedMatrix, ItemSet, ScoreTable, SearchOutcome};
use crate::features::msu_discovery::infrastructure::{
    ExhaustiveSearch, InterruptFlag, SearchOptions, Suda2Search,
};
use crate::features::msu_discovery::ports::ResultSink;
use serde::{Deserialize, Serialize};

/// Value shaped by a sink, with the outcome of the run that produced it
#[derive(Debug, Clone)]
pub struct MsuResult<T> {
    pub value: T,
    pub outcome: SearchOutcome,
}

/// SUDA risk of one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordScore {
    pub row: u32,
    /// MSUs identifying this record
    pub key_count: usize,
    pub min_key_size: Option<usize>,
    /// Sum of the scores of those MSUs
    pub score: f64,
}

impl RecordScore {
    fn new(row: u32) -> Self {
        Self {
            row,
            key_count: 0,
            min_key_size: None,
            score: 0.0,
        }
    }

    #[inline]
    pub fn is_sample_unique(&self) -> bool {
        self.key_count > 0
    }
}

/// Reusable MSU engine over one encoded matrix
pub struct MsuAnalyzer {
    matrix: EncodedMatrix,
    config: MsuConfig,
    interrupt: InterruptFlag,
}

impl MsuAnalyzer {
    /// Create an analyzer; the configuration is validated here
    pub fn new(matrix: EncodedMatrix, config: MsuConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            matrix,
            config,
            interrupt: InterruptFlag::new(),
        })
    }

    /// Encode-free shortcut for row vectors
    pub fn from_rows(rows: Vec<Vec<u32>>, config: MsuConfig) -> Result<Self> {
        Self::new(EncodedMatrix::new(rows)?, config)
    }

    /// Share a caller-owned cancellation flag
    pub fn with_interrupt(mut self, interrupt: InterruptFlag) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Handle for cancelling runs of this analyzer
    pub fn interrupt_flag(&self) -> InterruptFlag {
        self.interrupt.clone()
    }

    pub fn matrix(&self) -> &EncodedMatrix {
        &self.matrix
    }

    pub fn config(&self) -> &MsuConfig {
        &self.config
    }

    /// Configured key-size bound, capped at the number of columns
    pub fn max_key_size(&self) -> usize {
        self.config
            .effective_max_key_size(self.matrix.num_columns())
    }

    /// Run SUDA2 with the configured key-size bound
    pub fn run<S: ResultSink + ?Sized>(&self, sink: &mut S) -> Result<SearchOutcome> {
        self.run_with_max_key_size(self.max_key_size(), sink)
    }

    pub fn run_with_max_key_size<S: ResultSink + ?Sized>(
        &self,
        max_key_size: usize,
        sink: &mut S,
    ) -> Result<SearchOutcome> {
        let options = SearchOptions::from_config(&self.config);
        Suda2Search::new(&self.matrix, options, self.interrupt.clone()).run(max_key_size, sink)
    }

    /// Run the exhaustive baseline; refused beyond the configured oracle limits
    pub fn exhaustive<S: ResultSink + ?Sized>(&self, sink: &mut S) -> Result<SearchOutcome> {
        ExhaustiveSearch::new(&self.matrix, &self.config.oracle, self.interrupt.clone())?
            .run(self.max_key_size(), sink)
    }

    /// Every MSU, shortest first
    pub fn find_msus(&self) -> Result<MsuResult<Vec<ItemSet>>> {
        let mut sink = EnumerationSink::new();
        let outcome = self.run(&mut sink)?;
        Ok(MsuResult {
            value: sink.into_sorted(),
            outcome,
        })
    }

    /// Aggregated per-column and per-size statistics
    pub fn statistics(&self) -> Result<MsuResult<MsuStatistics>> {
        let mut sink = StatisticsSink::new(
            self.config.scoring,
            self.matrix.num_columns(),
            self.max_key_size(),
        );
        let outcome = self.run(&mut sink)?;
        Ok(MsuResult {
            value: sink.finish(),
            outcome,
        })
    }

    /// Whether any MSU of size `<= max_key_size` exists
    pub fn has_sample_unique(&self, max_key_size: usize) -> Result<MsuResult<bool>> {
        let mut sink = ThresholdSink::new();
        let outcome = self.run_with_max_key_size(max_key_size, &mut sink)?;
        Ok(MsuResult {
            value: sink.is_found(),
            outcome,
        })
    }

    /// Per-record SUDA scores, one entry per row
    pub fn record_scores(&self) -> Result<MsuResult<Vec<RecordScore>>> {
        let max_key_size = self.max_key_size();
        let table = ScoreTable::new(self.config.scoring, self.matrix.num_columns(), max_key_size);
        let mut records: Vec<RecordScore> = (0..self.matrix.num_rows() as u32)
            .map(RecordScore::new)
            .collect();

        let outcome = {
            let mut sink = ListenerSink::new(|row, size| {
                if let Some(record) = records.get_mut(row as usize) {
                    record.key_count += 1;
                    record.score += table.score(size);
                    record.min_key_size =
                        Some(record.min_key_size.map_or(size, |current| current.min(size)));
                }
            });
            self.run_with_max_key_size(max_key_size, &mut sink)?
        };

        Ok(MsuResult {
            value: records,
            outcome,
        })
    }
}
