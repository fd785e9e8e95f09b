//! Rank Index
//!
//! Orders the candidate items of one sub-table by ascending support, ties
//! broken by [`ItemId`]. Rank = position in that order. Ranks are only
//! meaningful inside the sub-table they were computed for.

use super::item_index::ItemIndex;
use crate::features::msu_discovery::domain::ItemId;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Default)]
pub struct RankIndex {
    order: Vec<ItemId>,
    ranks: FxHashMap<ItemId, usize>,
}

impl RankIndex {
    /// Rank `candidates` by their support in `index`
    pub fn new(index: &ItemIndex, candidates: impl IntoIterator<Item = ItemId>) -> Self {
        let mut keyed: Vec<(usize, ItemId)> = candidates
            .into_iter()
            .map(|id| (index.support(id), id))
            .collect();
        keyed.sort_unstable();
        keyed.dedup();

        let order: Vec<ItemId> = keyed.into_iter().map(|(_, id)| id).collect();
        let ranks = order
            .iter()
            .enumerate()
            .map(|(rank, &id)| (id, rank))
            .collect();
        Self { order, ranks }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// O(1) rank lookup
    #[inline]
    pub fn rank_of(&self, id: ItemId) -> Option<usize> {
        self.ranks.get(&id).copied()
    }

    #[inline]
    pub fn is_ranked_after(&self, id: ItemId, rank: usize) -> bool {
        self.rank_of(id).map_or(false, |r| r > rank)
    }

    /// Every id is ranked strictly after `rank`
    pub fn all_ranked_after(&self, ids: &[ItemId], rank: usize) -> bool {
        ids.iter().all(|&id| self.is_ranked_after(id, rank))
    }

    #[inline]
    pub fn item_at(&self, rank: usize) -> ItemId {
        self.order[rank]
    }

    /// Items rarest-first
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.order.iter().copied()
    }

    /// For each rank r, the number of distinct columns among items ranked after r
    pub fn distinct_columns_after(&self) -> Vec<usize> {
        let mut result = vec![0; self.order.len()];
        let mut seen = FxHashSet::default();
        for rank in (0..self.order.len()).rev() {
            result[rank] = seen.len();
            seen.insert(self.order[rank].column());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::msu_discovery::domain::EncodedMatrix;

    fn id(c: u32, v: u32) -> ItemId {
        ItemId::new(c, v)
    }

    fn index() -> ItemIndex {
        let matrix = EncodedMatrix::new(vec![
            vec![0, 1, 5],
            vec![0, 1, 5],
            vec![0, 2, 6],
            vec![1, 2, 6],
        ])
        .unwrap();
        ItemIndex::from_matrix(&matrix)
    }

    #[test]
    fn test_ascending_support() {
        let index = index();
        let ranks = RankIndex::new(&index, index.items().map(|i| i.id()));
        let supports: Vec<usize> = ranks.iter().map(|id| index.support(id)).collect();
        let mut sorted = supports.clone();
        sorted.sort();
        assert_eq!(supports, sorted);
        assert_eq!(ranks.len(), 6);
    }

    #[test]
    fn test_ties_broken_by_item_id() {
        let index = index();
        // All three have support 2
        let ranks = RankIndex::new(&index, [id(2, 6), id(1, 2), id(1, 1)]);
        assert_eq!(ranks.item_at(0), id(1, 1));
        assert_eq!(ranks.item_at(1), id(1, 2));
        assert_eq!(ranks.item_at(2), id(2, 6));
        assert_eq!(ranks.rank_of(id(2, 6)), Some(2));
        assert_eq!(ranks.rank_of(id(0, 0)), None);
    }

    #[test]
    fn test_ranked_after() {
        let index = index();
        let ranks = RankIndex::new(&index, [id(1, 1), id(1, 2), id(2, 6)]);
        assert!(ranks.is_ranked_after(id(2, 6), 1));
        assert!(!ranks.is_ranked_after(id(1, 2), 1));
        assert!(!ranks.is_ranked_after(id(0, 0), 0));
        assert!(ranks.all_ranked_after(&[id(1, 2), id(2, 6)], 0));
        assert!(!ranks.all_ranked_after(&[id(1, 1), id(2, 6)], 0));
    }

    #[test]
    fn test_distinct_columns_after() {
        let index = index();
        let ranks = RankIndex::new(&index, [id(1, 1), id(1, 2), id(2, 6)]);
        assert_eq!(ranks.distinct_columns_after(), vec![2, 1, 0]);
    }
}
