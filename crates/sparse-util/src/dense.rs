//! Dense row-major matrix used at the input/output boundary.
//!
//! `DenseMatrix` is the "normal" form user-entered matrices arrive in and
//! the form results are reconstructed into for display. It is a small
//! row-major container kept intentionally minimal and dependency-free so
//! the crate stays portable and easy to test.

use std::ops::{Index, IndexMut};

use crate::error::InvalidArgument;

#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl DenseMatrix {
    /// Builds a matrix from row vectors, inferring the shape.
    ///
    /// Every row must have the same length as the first one; a ragged input
    /// fails with [`InvalidArgument`]. An empty row list yields the 0x0
    /// matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, InvalidArgument> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(InvalidArgument::for_param(
                    "rows",
                    format!("row {} has {} columns, expected {}", i, row.len(), ncols),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// Builds a matrix from a row-major buffer of exactly `rows * cols`
    /// values.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, InvalidArgument> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(InvalidArgument::for_param(
                "data",
                format!(
                    "invalid shape ({}, {}) for buffer of length {}",
                    rows,
                    cols,
                    data.len()
                ),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// An all-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// The matrix as row vectors, the inverse of [`DenseMatrix::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|i| self.row_slice(i).to_vec()).collect()
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}
