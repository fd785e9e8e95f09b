//! SUDA2 search
//!
//! Depth-first branch-and-bound enumeration of Minimal Sample Uniques.
//!
//! # Algorithm
//! ```text
//! SUDA2(T, maxK):
//!   index items of T
//!   support 1          -> MSU of size 1
//!   support == |T|     -> dropped (cannot discriminate)
//!   maxK == 1          -> done
//!   rank the rest by ascending support (ties by item id)
//!   for each reference item i, rarest first:
//!     T_i = rows of T containing i, restricted to items ranked after i
//!     for each C in SUDA2(T_i, bound - 1):
//!       accept C ∪ {i} iff every item of C ranks after i
//!                      and C occurs in at least 2 rows of T
//! ```
//!
//! The second condition is the witness row: C is unique inside `T_i`, so a
//! second occurrence in `T` lies outside `T_i` and proves `C` alone does
//! not identify the row. Minimality for the other members follows from `C`
//! being minimal in `T_i`; completeness from choosing `i` as the
//! lowest-ranked member of every MSU.
//!
//! # References
//! - Manning, Haglin & Keane "A recursive search algorithm for statistical
//!   disclosure assessment" (Data Mining and Knowledge Discovery, 2008)

use super::interrupt::InterruptFlag;
use super::item_index::{ItemFilter, ItemIndex};
use super::pruning::PruningStrategy;
use super::rank_index::RankIndex;
use crate::config::MsuConfig;
use crate::errors::{Result, RiskError};
use crate::features::msu_discovery::domain::{
    EncodedMatrix, Item, ItemSet, RowSet, SearchOutcome, SearchStats, SearchStatus,
};
use crate::features::msu_discovery::ports::{ResultSink, SinkControl};
use std::time::Instant;
use tracing::{debug, error, info, trace};

/// Knobs taken from [`MsuConfig`]
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub pruning: PruningStrategy,
    pub verify_merges: bool,
    pub interrupt_check_interval: usize,
}

impl SearchOptions {
    pub fn from_config(config: &MsuConfig) -> Self {
        Self {
            pruning: PruningStrategy::new(config.pruning),
            verify_merges: config.verify_merges,
            interrupt_check_interval: config.interrupt_check_interval,
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from_config(&MsuConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
    Interrupted,
}

/// MSUs of a projected sub-table, kept for merging by the parent level
#[derive(Debug, Default)]
struct CandidateCollector {
    sets: Vec<ItemSet>,
}

impl ResultSink for CandidateCollector {
    fn register_item(&mut self, item: &Item) -> SinkControl {
        self.sets.push(ItemSet::from_item(item));
        SinkControl::Continue
    }

    fn register_merged(&mut self, reference: &Item, candidate: &ItemSet) -> SinkControl {
        self.sets.push(candidate.merged_with(reference.id()));
        SinkControl::Continue
    }

    fn register_set(&mut self, set: &ItemSet) -> SinkControl {
        self.sets.push(set.clone());
        SinkControl::Continue
    }
}

/// SUDA2 engine over one matrix
pub struct Suda2Search<'a> {
    matrix: &'a EncodedMatrix,
    options: SearchOptions,
    interrupt: InterruptFlag,
    stats: SearchStats,
}

impl<'a> Suda2Search<'a> {
    pub fn new(matrix: &'a EncodedMatrix, options: SearchOptions, interrupt: InterruptFlag) -> Self {
        Self {
            matrix,
            options,
            interrupt,
            stats: SearchStats::default(),
        }
    }

    /// Report every MSU of size `<= max_key_size` to `sink`
    ///
    /// An interrupt set before the call yields `Cancelled` without touching
    /// the sink.
    pub fn run<S: ResultSink + ?Sized>(
        &mut self,
        max_key_size: usize,
        sink: &mut S,
    ) -> Result<SearchOutcome> {
        let started = Instant::now();
        self.stats = SearchStats::default();

        if self.interrupt.is_interrupted() {
            debug!("SUDA2 search cancelled before start");
            return Ok(self.outcome(SearchStatus::Cancelled, 0, started));
        }
        if max_key_size == 0 {
            return Err(RiskError::invalid_input("max key size must be at least 1"));
        }

        let max_k = max_key_size.min(self.matrix.num_columns());
        info!(
            rows = self.matrix.num_rows(),
            columns = self.matrix.num_columns(),
            max_key_size = max_k,
            "SUDA2 search started"
        );

        let rows = RowSet::full(self.matrix.num_rows());
        let status = match self.search(&rows, None, max_k, 0, sink)? {
            Flow::Continue => SearchStatus::Completed,
            Flow::Stop => SearchStatus::ThresholdReached,
            Flow::Interrupted => SearchStatus::Cancelled,
        };

        let outcome = self.outcome(status, max_k, started);
        info!(
            status = ?outcome.status,
            msus = outcome.stats.msus_reported,
            sub_problems = outcome.stats.sub_problems,
            pruned = outcome.stats.pruned_branches,
            duration_ms = outcome.stats.duration_ms,
            "SUDA2 search finished"
        );
        Ok(outcome)
    }

    fn outcome(&self, status: SearchStatus, max_key_size: usize, started: Instant) -> SearchOutcome {
        let mut stats = self.stats.clone();
        stats.duration_ms = started.elapsed().as_secs_f64() * 1000.0;
        SearchOutcome {
            status,
            max_key_size,
            stats,
        }
    }

    fn search<S: ResultSink + ?Sized>(
        &mut self,
        rows: &RowSet,
        filter: Option<&ItemFilter<'_>>,
        max_k: usize,
        depth: usize,
        sink: &mut S,
    ) -> Result<Flow> {
        let index = match ItemIndex::build(
            self.matrix,
            rows,
            filter,
            &self.interrupt,
            self.options.interrupt_check_interval,
        ) {
            Some(index) => index,
            None => {
                debug!(depth, "SUDA2 interrupted during row scan");
                return Ok(Flow::Interrupted);
            }
        };
        self.stats.sub_problems += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let row_count = index.row_count();
        let mut candidates = Vec::new();
        for item in index.sorted_items() {
            if item.support() == 1 {
                if depth == 0 {
                    self.stats.msus_reported += 1;
                }
                if sink.register_item(item) == SinkControl::Stop {
                    return Ok(Flow::Stop);
                }
            } else if item.support() < row_count {
                candidates.push(item.id());
            }
        }

        if max_k <= 1 || candidates.is_empty() {
            return Ok(Flow::Continue);
        }

        let ranks = RankIndex::new(&index, candidates);
        let columns_after = ranks.distinct_columns_after();
        debug!(
            depth,
            rows = row_count,
            candidates = ranks.len(),
            max_key_size = max_k,
            "SUDA2 sub-table"
        );

        for rank in 0..ranks.len() {
            if self.interrupt.is_interrupted() {
                debug!(depth, rank, "SUDA2 interrupted between reference items");
                return Ok(Flow::Interrupted);
            }

            let reference_id = ranks.item_at(rank);
            let reference = index.get(reference_id).ok_or_else(|| {
                RiskError::invariant(format!("ranked item {} missing from index", reference_id))
            })?;

            let bound = self
                .options
                .pruning
                .bound(reference.support(), columns_after[rank], max_k);
            if !self.options.pruning.should_expand(&bound) {
                self.stats.pruned_branches += 1;
                continue;
            }

            let filter = ItemFilter::ranked_after(&ranks, rank);
            let mut projected = CandidateCollector::default();
            let flow = self.search(
                reference.rows(),
                Some(&filter),
                bound.child_max_key_size(),
                depth + 1,
                &mut projected,
            )?;
            if flow == Flow::Interrupted {
                return Ok(Flow::Interrupted);
            }

            for candidate in &projected.sets {
                if !ranks.all_ranked_after(candidate.items(), rank) {
                    self.stats.rank_rejections += 1;
                    continue;
                }
                if !index.support_at_least(candidate.items(), 2) {
                    self.stats.witness_rejections += 1;
                    continue;
                }
                if self.options.verify_merges {
                    self.verify_merge(reference, candidate)?;
                } else {
                    debug_assert_eq!(
                        self.merged_support(reference, candidate),
                        1,
                        "merged key {} is not a sample unique",
                        candidate.merged_with(reference_id)
                    );
                }

                trace!(depth, reference = %reference_id, candidate = %candidate, "MSU merged");
                if depth == 0 {
                    self.stats.msus_reported += 1;
                }
                if sink.register_merged(reference, candidate) == SinkControl::Stop {
                    return Ok(Flow::Stop);
                }
            }
        }

        Ok(Flow::Continue)
    }

    /// Rows of the current sub-table matching `candidate ∪ {reference}`
    fn merged_support(&self, reference: &Item, candidate: &ItemSet) -> usize {
        reference
            .rows()
            .iter()
            .filter(|&row| candidate.matches_row(self.matrix.row(row as usize)))
            .count()
    }

    /// The merged key must match exactly one row of the current sub-table
    fn verify_merge(&self, reference: &Item, candidate: &ItemSet) -> Result<()> {
        let support = self.merged_support(reference, candidate);
        if support != 1 {
            let merged = candidate.merged_with(reference.id());
            error!(key = %merged, support, "merged key is not a sample unique");
            return Err(RiskError::invariant(format!(
                "merged key {} has support {}, expected 1",
                merged, support
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::features::msu_discovery::domain::ItemId;

    #[derive(Default)]
    struct Collect(Vec<ItemSet>);

    impl ResultSink for Collect {
        fn register_set(&mut self, set: &ItemSet) -> SinkControl {
            self.0.push(set.clone());
            SinkControl::Continue
        }
    }

    fn id(c: u32, v: u32) -> ItemId {
        ItemId::new(c, v)
    }

    fn run(rows: Vec<Vec<u32>>, max_k: usize) -> (Vec<ItemSet>, SearchOutcome) {
        let matrix = EncodedMatrix::new(rows).unwrap();
        let mut sink = Collect::default();
        let outcome = Suda2Search::new(&matrix, SearchOptions::default(), InterruptFlag::new())
            .run(max_k, &mut sink)
            .unwrap();
        let mut sets = sink.0;
        sets.sort();
        (sets, outcome)
    }

    #[test]
    fn test_three_row_table() {
        let (sets, outcome) = run(vec![vec![1, 2, 3], vec![2, 2, 3], vec![1, 1, 3]], 3);
        assert_eq!(
            sets,
            vec![
                ItemSet::new([id(0, 2)]),
                ItemSet::new([id(1, 1)]),
                ItemSet::new([id(0, 1), id(1, 2)]),
            ]
        );
        assert_eq!(outcome.status, SearchStatus::Completed);
        assert_eq!(outcome.stats.msus_reported, 3);
        // Merged key remembers its row
        assert_eq!(sets[2].row(), Some(0));
    }

    #[test]
    fn test_max_key_size_one() {
        let (sets, _) = run(vec![vec![1, 2, 3], vec![2, 2, 3], vec![1, 1, 3]], 1);
        assert_eq!(sets.len(), 2);
        assert!(sets.iter().all(|s| s.len() == 1));
    }

    #[test]
    fn test_identical_rows_have_no_msus() {
        let (sets, outcome) = run(vec![vec![4, 4], vec![4, 4], vec![4, 4]], 2);
        assert!(sets.is_empty());
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_single_row_table() {
        let (sets, _) = run(vec![vec![0, 1, 2]], 3);
        assert_eq!(sets.len(), 3);
        assert!(sets.iter().all(|s| s.len() == 1 && s.row() == Some(0)));
    }

    #[test]
    fn test_three_item_key() {
        // Row 0 is unique only on all three attributes together
        let rows = vec![
            vec![0, 0, 0],
            vec![0, 0, 1],
            vec![0, 1, 0],
            vec![1, 0, 0],
            vec![0, 1, 1],
            vec![1, 0, 1],
            vec![1, 1, 0],
            vec![1, 1, 1],
        ];
        let (sets, _) = run(rows.clone(), 3);
        assert_eq!(sets.len(), 8);
        assert!(sets.iter().all(|s| s.len() == 3));

        let (sets, _) = run(rows, 2);
        assert!(sets.is_empty());
    }

    #[test]
    fn test_verify_merge_rejects_shared_key() {
        let matrix = EncodedMatrix::new(vec![vec![0, 0], vec![0, 0]]).unwrap();
        let search = Suda2Search::new(&matrix, SearchOptions::default(), InterruptFlag::new());
        let reference = Item::with_rows(id(0, 0), RowSet::full(2));
        let candidate = ItemSet::new([id(1, 0)]).with_row(0);

        assert_eq!(search.merged_support(&reference, &candidate), 2);
        let result = search.verify_merge(&reference, &candidate);
        assert!(matches!(result, Err(RiskError::InvariantViolation(_))));
    }

    #[test]
    fn test_verify_merge_accepts_unique_key() {
        let matrix = EncodedMatrix::new(vec![vec![1, 2, 3], vec![2, 2, 3], vec![1, 1, 3]]).unwrap();
        let search = Suda2Search::new(&matrix, SearchOptions::default(), InterruptFlag::new());
        let reference = Item::with_rows(id(0, 1), RowSet::from_iter([0, 2]));
        let candidate = ItemSet::new([id(1, 2)]).with_row(0);

        assert_eq!(search.merged_support(&reference, &candidate), 1);
        assert!(search.verify_merge(&reference, &candidate).is_ok());
    }

    #[test]
    fn test_unverified_merges_match_verified() {
        let rows = vec![
            vec![0, 3, 0, 1, 1],
            vec![0, 3, 0, 0, 1],
            vec![0, 3, 1, 1, 1],
            vec![1, 3, 0, 1, 2],
            vec![0, 2, 0, 1, 2],
            vec![1, 2, 1, 0, 2],
        ];
        let matrix = EncodedMatrix::new(rows).unwrap();
        let mut options = SearchOptions::from_config(&MsuConfig::from_preset(Preset::Fast));
        assert!(!options.verify_merges);

        let mut unverified = Collect::default();
        Suda2Search::new(&matrix, options, InterruptFlag::new())
            .run(5, &mut unverified)
            .unwrap();

        options.verify_merges = true;
        let mut verified = Collect::default();
        Suda2Search::new(&matrix, options, InterruptFlag::new())
            .run(5, &mut verified)
            .unwrap();

        unverified.0.sort();
        verified.0.sort();
        assert!(!verified.0.is_empty());
        assert_eq!(unverified.0, verified.0);
    }

    #[test]
    fn test_zero_max_key_size_rejected() {
        let matrix = EncodedMatrix::new(vec![vec![1]]).unwrap();
        let mut sink = Collect::default();
        let result =
            Suda2Search::new(&matrix, SearchOptions::default(), InterruptFlag::new()).run(0, &mut sink);
        assert!(matches!(result, Err(RiskError::InvalidInput(_))));
    }

    #[test]
    fn test_interrupted_before_start() {
        let matrix = EncodedMatrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let flag = InterruptFlag::new();
        flag.interrupt();
        let mut sink = Collect::default();
        let outcome = Suda2Search::new(&matrix, SearchOptions::default(), flag)
            .run(2, &mut sink)
            .unwrap();
        assert_eq!(outcome.status, SearchStatus::Cancelled);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn test_pruning_does_not_change_result() {
        let rows = vec![
            vec![0, 3, 0, 1, 1],
            vec![0, 3, 0, 0, 1],
            vec![0, 3, 1, 1, 1],
            vec![1, 3, 0, 1, 2],
            vec![0, 2, 0, 1, 2],
            vec![1, 2, 1, 0, 2],
        ];
        let matrix = EncodedMatrix::new(rows).unwrap();

        let mut pruned = Collect::default();
        let mut options = SearchOptions::default();
        let with = Suda2Search::new(&matrix, options, InterruptFlag::new())
            .run(5, &mut pruned)
            .unwrap();

        options.pruning = PruningStrategy::disabled();
        let mut unpruned = Collect::default();
        Suda2Search::new(&matrix, options, InterruptFlag::new())
            .run(5, &mut unpruned)
            .unwrap();

        pruned.0.sort();
        unpruned.0.sort();
        assert_eq!(pruned.0, unpruned.0);
        assert!(with.stats.sub_problems > 1);
    }
}
