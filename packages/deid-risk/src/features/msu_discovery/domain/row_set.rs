//! Sorted row-index sets
//!
//! Rows are collected by ascending scans, so the set is a plain sorted
//! vector with append-only construction.
//!
//! # Performance Characteristics
//! - Push (ascending): O(1)
//! - Contains: O(log n)
//! - Intersection: O(n + m) merge
//! - Bounded intersection count: stops as soon as the cap is reached

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sorted, duplicate-free set of row indices
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowSet {
    rows: Vec<u32>,
}

impl RowSet {
    #[inline]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// All rows `0..n`
    pub fn full(n: usize) -> Self {
        Self {
            rows: (0..n as u32).collect(),
        }
    }

    #[inline]
    pub fn singleton(row: u32) -> Self {
        Self { rows: vec![row] }
    }

    /// Create from iterator (sorted and deduplicated)
    pub fn from_iter(iter: impl IntoIterator<Item = u32>) -> Self {
        let mut rows: Vec<u32> = iter.into_iter().collect();
        rows.sort_unstable();
        rows.dedup();
        Self { rows }
    }

    /// Append a row larger than every row already present
    #[inline]
    pub fn push(&mut self, row: u32) {
        debug_assert!(self.rows.last().map_or(true, |&last| last < row));
        self.rows.push(row);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<u32> {
        self.rows.first().copied()
    }

    #[inline]
    pub fn contains(&self, row: u32) -> bool {
        self.rows.binary_search(&row).is_ok()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().copied()
    }

    /// Intersection as a new set
    pub fn intersection(&self, other: &RowSet) -> RowSet {
        let mut result = Vec::with_capacity(self.len().min(other.len()));
        let (mut i, mut j) = (0, 0);
        while i < self.rows.len() && j < other.rows.len() {
            match self.rows[i].cmp(&other.rows[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    result.push(self.rows[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        RowSet { rows: result }
    }

    /// Size of the intersection, counting no further than `cap`
    pub fn intersection_len_capped(&self, other: &RowSet, cap: usize) -> usize {
        let mut count = 0;
        let (mut i, mut j) = (0, 0);
        while i < self.rows.len() && j < other.rows.len() && count < cap {
            match self.rows[i].cmp(&other.rows[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    count += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        count
    }
}
