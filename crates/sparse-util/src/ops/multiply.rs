//! Sparse matrix product.

use crate::coo::SparseMatrix;
use crate::dense::DenseMatrix;
use crate::error::InvalidArgument;

/// Multiplies two matrices; `left.ncols()` must equal `right.nrows()`.
///
/// The scan is driven by `left`'s stored entries: for each entry
/// `(row, col, value)` every output column accumulates
/// `value * right[(col, j)]`, reading `right` through its per-cell lookup.
/// Total cost is O(left.nnz() * right.ncols() * right.nnz()), fine at the
/// manual-entry scale this crate targets. Cells that come out exactly zero
/// are dropped from the result's stored entries.
pub fn multiply(
    left: &SparseMatrix,
    right: &SparseMatrix,
) -> Result<SparseMatrix, InvalidArgument> {
    if left.ncols() != right.nrows() {
        return Err(InvalidArgument::new(
            "the number of columns in the left matrix are not equal to the number of rows in the right matrix",
        ));
    }

    let mut result = DenseMatrix::zeros(left.nrows(), right.ncols());
    for (row, col, value) in left.entries() {
        for j in 0..right.ncols() {
            result[(row, j)] += value * right.get(col, j)?;
        }
    }

    let product = SparseMatrix::from_dense(&result);
    log::debug!(
        "multiplied {}x{} by {}x{}: {} stored entries in the product",
        left.nrows(),
        left.ncols(),
        right.nrows(),
        right.ncols(),
        product.nnz()
    );
    Ok(product)
}
