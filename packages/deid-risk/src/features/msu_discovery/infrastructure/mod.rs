//! Search engines and per-sub-table indexes

pub mod exhaustive;
pub mod interrupt;
pub mod item_index;
pub mod pruning;
pub mod rank_index;
pub mod suda2;

pub use exhaustive::ExhaustiveSearch;
pub use interrupt::InterruptFlag;
pub use item_index::{ItemFilter, ItemIndex};
pub use pruning::{PruningBound, PruningStrategy};
pub use rank_index::RankIndex;
pub use suda2::{SearchOptions, Suda2Search};
