//! Minimal Sample Unique (MSU) discovery
//!
//! SUDA2 search over an encoded microdata table: finds every combination of
//! quasi-identifier values that occurs in exactly one record and none of
//! whose proper subsets does.
//!
//! - **domain**: matrix, items, item sets, scoring, search outcome
//! - **ports**: [`ResultSink`] trait consumed by the engines
//! - **infrastructure**: item/rank indexes, pruning, SUDA2 and the exhaustive baseline
//! - **application**: sink variants, statistics and the [`MsuAnalyzer`] facade

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{
    EnumerationSink, ListenerSink, MsuAnalyzer, MsuResult, MsuStatistics, RecordScore,
    StatisticsSink, ThresholdSink,
};
pub use domain::{
    EncodedMatrix, Item, ItemId, ItemSet, RowSet, ScoreTable, ScoringFormula, SearchOutcome,
    SearchStats, SearchStatus,
};
pub use infrastructure::{
    ExhaustiveSearch, InterruptFlag, ItemFilter, ItemIndex, PruningBound, PruningStrategy,
    RankIndex, SearchOptions, Suda2Search,
};
pub use ports::{ResultSink, SinkControl};
