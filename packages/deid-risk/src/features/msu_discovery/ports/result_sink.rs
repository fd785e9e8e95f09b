//! Result sink port
//!
//! Searches report every discovered MSU through one of three calls. The sink
//! decides what is kept and whether the search goes on.

use crate::features::msu_discovery::domain::{Item, ItemSet};

/// Sink verdict after a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkControl {
    Continue,
    /// Stop the search now; results so far stay valid
    Stop,
}

/// Consumer of discovered MSUs
///
/// Lifetime is one search invocation. The defaults funnel everything into
/// [`register_set`](ResultSink::register_set); sinks that only need sizes or
/// columns override the first two to skip building the set.
pub trait ResultSink {
    /// Size-1 MSU: an item with support 1
    fn register_item(&mut self, item: &Item) -> SinkControl {
        self.register_set(&ItemSet::from_item(item))
    }

    /// Reference item merged with a smaller candidate from its projection
    fn register_merged(&mut self, reference: &Item, candidate: &ItemSet) -> SinkControl {
        self.register_set(&candidate.merged_with(reference.id()))
    }

    /// Arbitrary MSU
    fn register_set(&mut self, set: &ItemSet) -> SinkControl;
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn register_item(&mut self, item: &Item) -> SinkControl {
        (**self).register_item(item)
    }

    fn register_merged(&mut self, reference: &Item, candidate: &ItemSet) -> SinkControl {
        (**self).register_merged(reference, candidate)
    }

    fn register_set(&mut self, set: &ItemSet) -> SinkControl {
        (**self).register_set(set)
    }
}
