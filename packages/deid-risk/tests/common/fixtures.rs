//! Test fixtures
//!
//! Small matrices with known MSU structure.

use deid_risk::features::msu_discovery::{
    EncodedMatrix, EnumerationSink, ExhaustiveSearch, InterruptFlag, ItemSet, SearchOptions,
    Suda2Search,
};
use deid_risk::config::OracleLimits;

/// Six rows, five columns; SUDA2 and the exhaustive baseline agree at maxK 5
pub fn scenario_a() -> EncodedMatrix {
    EncodedMatrix::new(vec![
        vec![0, 3, 0, 1, 1],
        vec![0, 3, 0, 0, 1],
        vec![0, 3, 1, 1, 1],
        vec![1, 3, 0, 1, 2],
        vec![0, 2, 0, 1, 2],
        vec![1, 2, 1, 0, 2],
    ])
    .expect("scenario A is well formed")
}

/// Three rows; the last column is constant
pub fn scenario_b() -> EncodedMatrix {
    EncodedMatrix::new(vec![vec![1, 2, 3], vec![2, 2, 3], vec![1, 1, 3]])
        .expect("scenario B is well formed")
}

/// Every combination of `columns` binary values: each full row is its only MSU
pub fn binary_cube(columns: usize) -> EncodedMatrix {
    let rows = (0..1u32 << columns)
        .map(|bits| (0..columns).map(|c| (bits >> c) & 1).collect())
        .collect();
    EncodedMatrix::new(rows).expect("binary cube is well formed")
}

/// All rows identical: no MSU at any size
pub fn uniform(rows: usize, columns: usize) -> EncodedMatrix {
    EncodedMatrix::new(vec![vec![7; columns]; rows]).expect("uniform matrix is well formed")
}

/// SUDA2 MSUs, shortest first
pub fn suda2_msus(matrix: &EncodedMatrix, max_key_size: usize) -> Vec<ItemSet> {
    suda2_msus_with(matrix, max_key_size, SearchOptions::default())
}

pub fn suda2_msus_with(
    matrix: &EncodedMatrix,
    max_key_size: usize,
    options: SearchOptions,
) -> Vec<ItemSet> {
    let mut sink = EnumerationSink::new();
    Suda2Search::new(matrix, options, InterruptFlag::new())
        .run(max_key_size, &mut sink)
        .expect("SUDA2 run succeeds");
    sink.into_sorted()
}

/// Exhaustive baseline MSUs, shortest first
pub fn exhaustive_msus(matrix: &EncodedMatrix, max_key_size: usize) -> Vec<ItemSet> {
    let mut sink = EnumerationSink::new();
    ExhaustiveSearch::new(matrix, &OracleLimits::default(), InterruptFlag::new())
        .expect("matrix within oracle limits")
        .run(max_key_size, &mut sink)
        .expect("exhaustive run succeeds");
    sink.into_sorted()
}
