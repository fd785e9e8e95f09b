//! Custom assertions for MSU verification

use deid_risk::features::msu_discovery::{EncodedMatrix, ItemSet};
use pretty_assertions::assert_eq;

/// Every MSU matches exactly one row, and that row is the one it carries
pub fn assert_sound(matrix: &EncodedMatrix, msus: &[ItemSet]) {
    for msu in msus {
        assert_eq!(msu.support_in(matrix), 1, "{msu} is not sample unique");
        if let Some(row) = msu.row() {
            assert!(
                msu.matches_row(matrix.row(row as usize)),
                "{msu} does not match its witness row {row}"
            );
        }
    }
}

/// No MSU has a sample-unique proper subset
///
/// Support is anti-monotone, so dropping one item at a time is enough.
pub fn assert_minimal(matrix: &EncodedMatrix, msus: &[ItemSet]) {
    for msu in msus.iter().filter(|m| m.len() > 1) {
        for skip in msu.items() {
            let subset = ItemSet::new(msu.items().iter().copied().filter(|id| id != skip));
            assert!(
                subset.support_in(matrix) >= 2,
                "{msu} is not minimal: {subset} is already unique"
            );
        }
    }
}

/// Each MSU has at most `max_key_size` items
pub fn assert_size_bound(msus: &[ItemSet], max_key_size: usize) {
    for msu in msus {
        assert!(
            msu.len() <= max_key_size,
            "{msu} exceeds key size bound {max_key_size}"
        );
    }
}

/// No MSU is reported twice
pub fn assert_distinct(msus: &[ItemSet]) {
    for pair in msus.windows(2) {
        assert!(pair[0] != pair[1], "{} reported twice", pair[0]);
    }
}

/// Two sorted MSU lists are identical
pub fn assert_same_msus(actual: &[ItemSet], expected: &[ItemSet]) {
    let render = |sets: &[ItemSet]| sets.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(render(actual), render(expected));
}
