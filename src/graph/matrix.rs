//! Dense square storage for edge multiplicities.
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::graph::core::GraphError;

type SmallRow<T> = SmallVec<[T; 8]>;

/// Row-major `n x n` matrix of edge multiplicities. The diagonal holds
/// self-loop counts; symmetry is the caller's invariant and is checked
/// through [`AdjMatrix::symmetry_violation`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjMatrix {
    rows: Vec<SmallRow<u64>>,
}

impl AdjMatrix {
    pub fn zeroed(size: usize) -> Self {
        let mut rows = Vec::with_capacity(size);
        for _ in 0..size {
            rows.push(SmallRow::from_elem(0, size));
        }
        Self { rows }
    }

    /// Row-major construction. Every row must match the outer length, so a
    /// constructed matrix is always square.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, GraphError> {
        let expected = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != expected {
                return Err(GraphError::Ragged {
                    row,
                    expected,
                    found: entries.len(),
                });
            }
        }
        Ok(Self {
            rows: rows.into_iter().map(SmallRow::from_vec).collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Multiplicity at `(row, col)`. Panics on out-of-range indices like
    /// slice indexing; the forgiving lookup lives on `Graph`.
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.rows[row][col]
    }

    pub fn get_checked(&self, row: usize, col: usize) -> Option<u64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Writes both mirror cells so the matrix stays symmetric.
    pub fn set_symmetric(&mut self, row: usize, col: usize, value: u64) {
        self.rows[row][col] = value;
        self.rows[col][row] = value;
    }

    pub fn row(&self, row: usize) -> &[u64] {
        &self.rows[row]
    }

    /// First cell pair with `m[i][j] != m[j][i]`, if any.
    pub fn symmetry_violation(&self) -> Option<(usize, usize)> {
        for i in 0..self.size() {
            for j in (i + 1)..self.size() {
                if self.rows[i][j] != self.rows[j][i] {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Sum over `i <= j`: every parallel edge and every self-loop counts
    /// once per occurrence.
    pub fn upper_triangle_sum(&self) -> u64 {
        let mut total = 0;
        for (i, row) in self.rows.iter().enumerate() {
            for &value in &row[i..] {
                total += value;
            }
        }
        total
    }
}

impl fmt::Debug for AdjMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjMatrix")
            .field("rows", &self.rows)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = AdjMatrix::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            GraphError::Ragged {
                row: 1,
                expected: 2,
                found: 1,
            }
        );

        let matrix = AdjMatrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(matrix.size(), 2);
    }
}
