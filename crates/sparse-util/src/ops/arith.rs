//! Elementwise addition and subtraction.

use crate::coo::SparseMatrix;
use crate::dense::DenseMatrix;
use crate::error::InvalidArgument;

/// Adds two matrices of the same shape.
///
/// Cells that net to exactly zero are dropped from the result's stored
/// entries.
pub fn add(left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix, InvalidArgument> {
    combine(left, right, 1.0)
}

/// Subtracts `right` from `left`; the shapes must match.
///
/// Cells that net to exactly zero are dropped from the result's stored
/// entries.
pub fn subtract(
    left: &SparseMatrix,
    right: &SparseMatrix,
) -> Result<SparseMatrix, InvalidArgument> {
    combine(left, right, -1.0)
}

// Scatters both operands into a dense accumulator of the shared shape and
// re-sparsifies. Left entries are written by assignment, right entries
// accumulate with the given sign; converting back through `from_dense`
// drops any cell that cancels to exactly zero.
fn combine(
    left: &SparseMatrix,
    right: &SparseMatrix,
    sign: f64,
) -> Result<SparseMatrix, InvalidArgument> {
    if left.nrows() != right.nrows() || left.ncols() != right.ncols() {
        return Err(InvalidArgument::new("matrices are not of same size"));
    }

    let mut result = DenseMatrix::zeros(left.nrows(), left.ncols());
    for (row, col, value) in left.entries() {
        result[(row, col)] = value;
    }
    for (row, col, value) in right.entries() {
        result[(row, col)] += sign * value;
    }

    let combined = SparseMatrix::from_dense(&result);
    log::debug!(
        "combined {}x{} matrices: {} and {} stored entries -> {}",
        left.nrows(),
        left.ncols(),
        left.nnz(),
        right.nnz(),
        combined.nnz()
    );
    Ok(combined)
}
