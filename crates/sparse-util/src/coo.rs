//! Coordinate-list (COO) sparse matrix.
//!
//! `SparseMatrix` stores only the non-zero entries of a rectangular `f64`
//! matrix as parallel coordinate/value vectors, together with the logical
//! shape of the matrix it represents. Entry order is insertion order from
//! whichever constructor produced the instance; none of the operations
//! assume the entries are sorted.

use crate::dense::DenseMatrix;
use crate::error::InvalidArgument;

#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    indexes: Vec<(usize, usize)>, // (row, col) per stored entry
    elements: Vec<f64>,           // parallel to indexes
    original_rows: usize,
    original_cols: usize,
}

impl SparseMatrix {
    /// Allocates a sparse matrix with room for exactly `elements_count`
    /// entries, all initialized to coordinate (0, 0) and value zero.
    ///
    /// Counts are taken as signed integers and validated in order: the
    /// capacity may not exceed `rows * cols`, and none of the three counts
    /// may be negative. Slots are filled in afterwards with
    /// [`SparseMatrix::set_entry`].
    pub fn with_capacity(
        elements_count: i64,
        rows: i64,
        cols: i64,
    ) -> Result<Self, InvalidArgument> {
        if elements_count > rows.saturating_mul(cols) {
            return Err(InvalidArgument::for_param(
                "elements_count",
                "elements_count should not be more than rows multiplied by cols",
            ));
        }
        if elements_count < 0 {
            return Err(InvalidArgument::for_param(
                "elements_count",
                "elements_count should not be less than zero",
            ));
        }
        if rows < 0 {
            return Err(InvalidArgument::for_param(
                "rows",
                "rows should not be less than zero",
            ));
        }
        if cols < 0 {
            return Err(InvalidArgument::for_param(
                "cols",
                "cols should not be less than zero",
            ));
        }

        let nnz = elements_count as usize;
        Ok(Self {
            indexes: vec![(0, 0); nnz],
            elements: vec![0.0; nnz],
            original_rows: rows as usize,
            original_cols: cols as usize,
        })
    }

    /// Builds the sparse form of a dense matrix.
    ///
    /// Cells whose value is exactly zero are skipped; the remaining cells
    /// are stored in row-major scan order. Never fails.
    pub fn from_dense(matrix: &DenseMatrix) -> Self {
        let mut indexes = Vec::new();
        let mut elements = Vec::new();
        for i in 0..matrix.nrows() {
            for j in 0..matrix.ncols() {
                let value = matrix[(i, j)];
                if value != 0.0 {
                    indexes.push((i, j));
                    elements.push(value);
                }
            }
        }
        log::trace!(
            "sparsified {}x{} dense matrix into {} stored entries",
            matrix.nrows(),
            matrix.ncols(),
            elements.len()
        );
        Self {
            indexes,
            elements,
            original_rows: matrix.nrows(),
            original_cols: matrix.ncols(),
        }
    }

    pub(crate) fn from_parts_unchecked(
        rows: usize,
        cols: usize,
        indexes: Vec<(usize, usize)>,
        elements: Vec<f64>,
    ) -> Self {
        Self {
            indexes,
            elements,
            original_rows: rows,
            original_cols: cols,
        }
    }

    /// Count of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// Count of rows in the original matrix.
    pub fn nrows(&self) -> usize {
        self.original_rows
    }

    /// Count of columns in the original matrix.
    pub fn ncols(&self) -> usize {
        self.original_cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.original_rows, self.original_cols)
    }

    /// Stored entries as `(row, col, value)` in storage order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.indexes
            .iter()
            .zip(&self.elements)
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Overwrites the entry stored at `slot`.
    ///
    /// The slot must have been allocated by [`SparseMatrix::with_capacity`]
    /// and the coordinate must lie inside the original shape. Nothing stops
    /// two slots from naming the same coordinate; the behavior of the other
    /// operations on such a matrix is unspecified.
    pub fn set_entry(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
        value: f64,
    ) -> Result<(), InvalidArgument> {
        if slot >= self.elements.len() {
            return Err(InvalidArgument::for_param(
                "slot",
                format!(
                    "slot {} is out of range for {} stored entries",
                    slot,
                    self.elements.len()
                ),
            ));
        }
        if row >= self.original_rows || col >= self.original_cols {
            return Err(InvalidArgument::new(
                "index is out of range of original matrix",
            ));
        }
        self.indexes[slot] = (row, col);
        self.elements[slot] = value;
        Ok(())
    }

    /// Value at `(row, col)` of the original matrix.
    ///
    /// A coordinate that is in range but not stored reads as zero. The
    /// lookup is a linear scan over the stored entries, O(nnz) per call.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, InvalidArgument> {
        if row >= self.original_rows || col >= self.original_cols {
            return Err(InvalidArgument::new(
                "index is out of range of original matrix",
            ));
        }
        Ok(self.lookup(row, col))
    }

    // In-range lookup; first stored match wins.
    pub(crate) fn lookup(&self, row: usize, col: usize) -> f64 {
        for (i, &(r, c)) in self.indexes.iter().enumerate() {
            if r == row && c == col {
                return self.elements[i];
            }
        }
        0.0
    }

    /// Reconstructs the full dense matrix this instance represents.
    ///
    /// Inverse of [`SparseMatrix::from_dense`] for matrices without
    /// duplicate stored coordinates.
    pub fn to_dense(&self) -> DenseMatrix {
        let mut result = DenseMatrix::zeros(self.original_rows, self.original_cols);
        for i in 0..self.original_rows {
            for j in 0..self.original_cols {
                result[(i, j)] = self.lookup(i, j);
            }
        }
        result
    }
}
