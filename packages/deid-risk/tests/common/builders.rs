//! Test data builders

use deid_risk::features::msu_discovery::EncodedMatrix;

/// Builder for EncodedMatrix
#[derive(Debug, Default)]
pub struct MatrixBuilder {
    rows: Vec<Vec<u32>>,
}

impl MatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record
    pub fn with_row(mut self, row: &[u32]) -> Self {
        self.rows.push(row.to_vec());
        self
    }

    /// Add `count` copies of one record
    pub fn with_repeated_row(mut self, row: &[u32], count: usize) -> Self {
        for _ in 0..count {
            self.rows.push(row.to_vec());
        }
        self
    }

    pub fn build(self) -> EncodedMatrix {
        EncodedMatrix::new(self.rows).expect("builder produced a valid matrix")
    }
}
