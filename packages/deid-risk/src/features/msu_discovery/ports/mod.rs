//! Ports (interfaces) for MSU discovery

pub mod result_sink;

pub use result_sink::{ResultSink, SinkControl};
