//! Item sets (candidate keys)
//!
//! Members are kept sorted by [`ItemId`], so equality and hashing depend only
//! on membership. A set discovered as a sample unique also remembers the one
//! row it identifies; that row takes no part in equality.

use super::item::{Item, ItemId};
use super::matrix::EncodedMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unordered set of items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSet {
    items: Vec<ItemId>,

    /// Row identified by this set, when it is a sample unique
    row: Option<u32>,
}

impl ItemSet {
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items, row: None }
    }

    /// Single-item set identifying the item's first supporting row
    pub fn from_item(item: &Item) -> Self {
        Self {
            items: vec![item.id()],
            row: item.rows().first(),
        }
    }

    pub fn with_row(mut self, row: u32) -> Self {
        self.row = Some(row);
        self
    }

    /// Copy with `id` added; the identified row is kept
    pub fn merged_with(&self, id: ItemId) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        let pos = self.items.partition_point(|&existing| existing < id);
        items.extend_from_slice(&self.items[..pos]);
        if self.items.get(pos) != Some(&id) {
            items.push(id);
        }
        items.extend_from_slice(&self.items[pos..]);
        Self {
            items,
            row: self.row,
        }
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
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    #[inline]
    pub fn row(&self) -> Option<u32> {
        self.row
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.binary_search(&id).is_ok()
    }

    pub fn columns(&self) -> impl Iterator<Item = u32> + '_ {
        self.items.iter().map(|id| id.column())
    }

    /// Every member of `self` is a member of `other`
    pub fn is_subset_of(&self, other: &ItemSet) -> bool {
        self.items.iter().all(|&id| other.contains(id))
    }

    pub fn is_proper_subset_of(&self, other: &ItemSet) -> bool {
        self.len() < other.len() && self.is_subset_of(other)
    }

    /// Row matches every member
    pub fn matches_row(&self, row: &[u32]) -> bool {
        self.items
            .iter()
            .all(|id| row.get(id.column() as usize) == Some(&id.value()))
    }

    /// Number of matrix rows matching every member
    pub fn support_in(&self, matrix: &EncodedMatrix) -> usize {
        matrix.rows().filter(|row| self.matches_row(row)).count()
    }
}

impl PartialEq for ItemSet {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for ItemSet {}

impl Hash for ItemSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Shorter sets first, then member-wise
impl Ord for ItemSet {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.items
            .len()
            .cmp(&other.items.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "}}")
    }
}
