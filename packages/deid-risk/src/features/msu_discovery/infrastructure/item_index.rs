//! Item Index
//!
//! Maps (column, value) to an [`Item`] with its supporting rows, built by a
//! single scan over a row subset: O(rows · columns).
//!
//! Indexes are local to one sub-table. Every recursive call builds its own and
//! drops it on return.

use super::interrupt::InterruptFlag;
use super::rank_index::RankIndex;
use crate::errors::Result;
use crate::features::msu_discovery::domain::{EncodedMatrix, Item, ItemId, RowSet};
use rustc_hash::FxHashMap;

/// Restricts an index to items ranked strictly after a reference item
#[derive(Debug, Clone, Copy)]
pub struct ItemFilter<'a> {
    ranks: &'a RankIndex,
    after: usize,
}

impl<'a> ItemFilter<'a> {
    pub fn ranked_after(ranks: &'a RankIndex, rank: usize) -> Self {
        Self { ranks, after: rank }
    }

    #[inline]
    pub fn accepts(&self, id: ItemId) -> bool {
        self.ranks.is_ranked_after(id, self.after)
    }
}

/// Items of one row subset
#[derive(Debug, Clone)]
pub struct ItemIndex {
    items: FxHashMap<ItemId, Item>,
    row_count: usize,
}

impl ItemIndex {
    /// Index a whole matrix given as row vectors
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let matrix = EncodedMatrix::new(rows)?;
        Ok(Self::from_matrix(&matrix))
    }

    /// Index every row of a matrix
    pub fn from_matrix(matrix: &EncodedMatrix) -> Self {
        let rows = RowSet::full(matrix.num_rows());
        let mut index = Self::with_row_count(rows.len());
        for row in rows.iter() {
            index.scan_row(matrix, row, None);
        }
        index
    }

    /// Index `rows` of `matrix`, keeping only items accepted by `filter`
    ///
    /// Polls `interrupt` every `check_interval` rows; returns `None` once it
    /// is set.
    pub fn build(
        matrix: &EncodedMatrix,
        rows: &RowSet,
        filter: Option<&ItemFilter<'_>>,
        interrupt: &InterruptFlag,
        check_interval: usize,
    ) -> Option<Self> {
        let interval = check_interval.max(1);
        let mut index = Self::with_row_count(rows.len());
        for (position, row) in rows.iter().enumerate() {
            if position % interval == 0 && interrupt.is_interrupted() {
                return None;
            }
            index.scan_row(matrix, row, filter);
        }
        Some(index)
    }

    fn with_row_count(row_count: usize) -> Self {
        Self {
            items: FxHashMap::default(),
            row_count,
        }
    }

    fn scan_row(&mut self, matrix: &EncodedMatrix, row: u32, filter: Option<&ItemFilter<'_>>) {
        for (column, &value) in matrix.row(row as usize).iter().enumerate() {
            let id = ItemId::new(column as u32, value);
            if filter.map_or(true, |f| f.accepts(id)) {
                self.items
                    .entry(id)
                    .or_insert_with(|| Item::new(id))
                    .add_row(row);
            }
        }
    }

    /// Rows in the indexed subset
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Support of `id` in this subset (0 when absent)
    pub fn support(&self, id: ItemId) -> usize {
        self.items.get(&id).map_or(0, Item::support)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Items in [`ItemId`] order
    pub fn sorted_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_unstable_by_key(|item| item.id());
        items
    }

    /// Whether at least `n` rows of this subset contain every item of `ids`
    pub fn support_at_least(&self, ids: &[ItemId], n: usize) -> bool {
        if n == 0 {
            return true;
        }
        if ids.is_empty() {
            return self.row_count >= n;
        }

        let mut members = Vec::with_capacity(ids.len());
        for id in ids {
            match self.items.get(id) {
                Some(item) => members.push(item),
                None => return false,
            }
        }
        members.sort_unstable_by_key(|item| item.support());

        let (smallest, rest) = members.split_at(1);
        if smallest[0].support() < n {
            return false;
        }
        if let [only] = rest {
            return smallest[0].rows().intersection_len_capped(only.rows(), n) >= n;
        }

        let mut count = 0;
        for row in smallest[0].rows().iter() {
            if rest.iter().all(|item| item.rows().contains(row)) {
                count += 1;
                if count >= n {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(c: u32, v: u32) -> ItemId {
        ItemId::new(c, v)
    }

    fn sample() -> EncodedMatrix {
        EncodedMatrix::new(vec![vec![1, 2, 3], vec![2, 2, 3], vec![1, 1, 3]]).unwrap()
    }

    #[test]
    fn test_from_matrix_supports() {
        let index = ItemIndex::from_matrix(&sample());
        assert_eq!(index.row_count(), 3);
        assert_eq!(index.len(), 5);
        assert_eq!(index.support(id(0, 1)), 2);
        assert_eq!(index.support(id(0, 2)), 1);
        assert_eq!(index.support(id(2, 3)), 3);
        assert_eq!(index.support(id(2, 9)), 0);
        assert_eq!(index.get(id(0, 1)).unwrap().rows().as_slice(), &[0, 2]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(ItemIndex::from_rows(vec![vec![1, 2], vec![3]]).is_err());
        assert!(ItemIndex::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_build_on_subset() {
        let matrix = sample();
        let rows = RowSet::from_iter([0, 2]);
        let index = ItemIndex::build(&matrix, &rows, None, &InterruptFlag::new(), 1).unwrap();
        assert_eq!(index.row_count(), 2);
        assert_eq!(index.support(id(0, 1)), 2);
        assert_eq!(index.support(id(0, 2)), 0);
        assert_eq!(index.support(id(1, 1)), 1);
    }

    #[test]
    fn test_build_interrupted() {
        let flag = InterruptFlag::new();
        flag.interrupt();
        let rows = RowSet::full(3);
        assert!(ItemIndex::build(&sample(), &rows, None, &flag, 1).is_none());
    }

    #[test]
    fn test_build_with_filter() {
        let matrix = sample();
        let full = ItemIndex::from_matrix(&matrix);
        let ranks = RankIndex::new(&full, [id(0, 1), id(1, 2), id(2, 3)]);
        // id(0,1) and id(1,2) tie at support 2; id(0,1) ranks first
        let filter = ItemFilter::ranked_after(&ranks, 0);
        let rows = RowSet::full(3);
        let index =
            ItemIndex::build(&matrix, &rows, Some(&filter), &InterruptFlag::new(), 8).unwrap();
        assert_eq!(index.support(id(0, 1)), 0);
        assert_eq!(index.support(id(1, 2)), 2);
        assert_eq!(index.support(id(2, 3)), 3);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_support_at_least() {
        let index = ItemIndex::from_matrix(&sample());
        assert!(index.support_at_least(&[id(0, 1)], 2));
        assert!(!index.support_at_least(&[id(0, 1), id(1, 2)], 2));
        assert!(index.support_at_least(&[id(0, 1), id(1, 2)], 1));
        assert!(index.support_at_least(&[id(0, 1), id(2, 3)], 2));
        assert!(index.support_at_least(&[id(0, 1), id(1, 1), id(2, 3)], 1));
        assert!(!index.support_at_least(&[id(0, 7)], 1));
        assert!(index.support_at_least(&[], 3));
    }
}
