//! Dense integer matrices: traversal and naive multiplication.

use std::fmt;

use crate::error::AlgoError;

/// Row-major matrix of `i64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Create a zero matrix.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Create the n x n identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    /// Build from nested rows. Every row must have the same length.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, AlgoError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(AlgoError::DimensionMismatch(format!(
                "row {i} has {} columns, expected {cols}",
                row.len()
            )));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.concat(),
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Visit every element row by row. O(rows * cols).
    #[must_use]
    pub fn traverse(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.data.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(self.data[row * self.cols + col]);
            }
        }
        out
    }

    /// Triple-loop product. O(n³) for square inputs.
    pub fn multiply(&self, other: &Self) -> Result<Self, AlgoError> {
        if self.cols != other.rows {
            return Err(AlgoError::DimensionMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0i64;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                out.data[i * other.cols + j] = sum;
            }
        }
        Ok(out)
    }

    /// Rows as nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(<[i64]>::to_vec).collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>4}")).collect();
            writeln!(f, "{}", cells.join(""))?;
        }
        Ok(())
    }
}
