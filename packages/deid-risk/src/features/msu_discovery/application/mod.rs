//! Application layer: sinks, statistics and the analyzer facade

pub mod analyzer;
pub mod sinks;
pub mod statistics;

pub use analyzer::{MsuAnalyzer, MsuResult, RecordScore};
pub use sinks::{EnumerationSink, ListenerSink, StatisticsSink, ThresholdSink};
pub use statistics::MsuStatistics;
