//! Items: (column, value) pairs with their supporting rows
//!
//! An item's identity is a packed 64-bit integer: column in the high 32 bits,
//! value in the low 32 bits. Packing is lossless only while both fit their
//! 32-bit half, which bounds the encodable column count and per-column
//! dictionary size.

use super::row_set::RowSet;
use serde::{Deserialize, Serialize};
use std::fmt;

const VALUE_BITS: u32 = 32;
const VALUE_MASK: u64 = (1 << VALUE_BITS) - 1;

/// Packed (column, value) identifier
///
/// Ordering is column-major, then by value. Used as the deterministic
/// tie-breaker wherever items of equal support are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    #[inline]
    pub fn new(column: u32, value: u32) -> Self {
        Self(((column as u64) << VALUE_BITS) | value as u64)
    }

    /// Pack wider inputs, `None` when either half overflows
    pub fn try_pack(column: usize, value: u64) -> Option<Self> {
        let column = u32::try_from(column).ok()?;
        let value = u32::try_from(value).ok()?;
        Some(Self::new(column, value))
    }

    #[inline]
    pub fn column(self) -> u32 {
        (self.0 >> VALUE_BITS) as u32
    }

    #[inline]
    pub fn value(self) -> u32 {
        (self.0 & VALUE_MASK) as u32
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}={}", self.column(), self.value())
    }
}

/// Item with the rows (of the current sub-table) in which it occurs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    rows: RowSet,
}

impl Item {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            rows: RowSet::new(),
        }
    }

    pub fn with_rows(id: ItemId, rows: RowSet) -> Self {
        Self { id, rows }
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.id.column()
    }

    #[inline]
    pub fn rows(&self) -> &RowSet {
        &self.rows
    }

    /// Number of supporting rows
    #[inline]
    pub fn support(&self) -> usize {
        self.rows.len()
    }

    /// Row scans are ascending, so this is an append
    #[inline]
    pub(crate) fn add_row(&mut self, row: u32) {
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let id = ItemId::new(7, 42);
        assert_eq!(id.column(), 7);
        assert_eq!(id.value(), 42);

        let max = ItemId::new(u32::MAX, u32::MAX);
        assert_eq!(max.column(), u32::MAX);
        assert_eq!(max.value(), u32::MAX);
    }

    #[test]
    fn test_try_pack_overflow() {
        assert!(ItemId::try_pack(3, 5).is_some());
        assert!(ItemId::try_pack(3, u64::from(u32::MAX) + 1).is_none());
    }

    #[test]
    fn test_ordering_is_column_major() {
        assert!(ItemId::new(0, 100) < ItemId::new(1, 0));
        assert!(ItemId::new(1, 0) < ItemId::new(1, 1));
    }

    #[test]
    fn test_item_support() {
        let mut item = Item::new(ItemId::new(0, 1));
        item.add_row(2);
        item.add_row(5);
        assert_eq!(item.support(), 2);
        assert_eq!(item.id().to_string(), "c0=1");
    }
}
