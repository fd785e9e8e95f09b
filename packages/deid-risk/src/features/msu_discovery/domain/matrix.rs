//! Dictionary-encoded input table
//!
//! Rows are records, columns are attributes, cells are dense per-column
//! codes produced by an upstream encoder. Storage is row-major and flat.

use crate::errors::{Result, RiskError};
use serde::{Deserialize, Serialize};

/// Rectangular matrix of encoded attribute values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedMatrix {
    /// Row-major cells (len = rows * columns)
    cells: Vec<u32>,
    num_rows: usize,
    num_columns: usize,
}

impl EncodedMatrix {
    /// Build from row vectors, rejecting empty or ragged input
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(RiskError::invalid_input("matrix has no rows"));
        }

        let num_columns = rows[0].len();
        if num_columns == 0 {
            return Err(RiskError::invalid_input("matrix has no columns"));
        }
        if num_columns > u32::MAX as usize || rows.len() > u32::MAX as usize {
            return Err(RiskError::invalid_input(format!(
                "matrix of {} rows x {} columns exceeds the 32-bit index range",
                rows.len(),
                num_columns
            )));
        }

        let mut cells = Vec::with_capacity(rows.len() * num_columns);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != num_columns {
                return Err(RiskError::invalid_input(format!(
                    "row {} has {} columns, expected {}",
                    index,
                    row.len(),
                    num_columns
                )));
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            cells,
            num_rows: rows.len(),
            num_columns,
        })
    }

    /// Build from a slice of row slices
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        Self::new(rows.iter().map(|r| r.as_ref().to_vec()).collect())
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Cells of one row
    #[inline]
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.num_columns;
        &self.cells[start..start + self.num_columns]
    }

    #[inline]
    pub fn value(&self, row: usize, column: usize) -> u32 {
        self.cells[row * self.num_columns + column]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.num_columns)
    }
}
