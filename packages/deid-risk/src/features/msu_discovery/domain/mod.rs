//! Domain models for MSU discovery

pub mod item;
pub mod item_set;
pub mod matrix;
pub mod outcome;
pub mod row_set;
pub mod scoring;

pub use item::{Item, ItemId};
pub use item_set::ItemSet;
pub use matrix::EncodedMatrix;
pub use outcome::{SearchOutcome, SearchStats, SearchStatus};
pub use row_set::RowSet;
pub use scoring::{ScoreTable, ScoringFormula};
