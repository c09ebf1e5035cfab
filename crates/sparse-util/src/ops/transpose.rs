//! Sparse transpose via a counting sort over the original rows.

use crate::coo::SparseMatrix;

/// Returns the transpose of `matrix`.
///
/// Entries land grouped by their original column (the new row) in a single
/// counting-sort pass: a histogram of entries per original row, an exclusive
/// prefix sum giving each row its first output slot, then one placement pass
/// that swaps every coordinate. Within a group the entries keep the original
/// storage order and are not further sorted by column.
///
/// A matrix with no stored entries is returned as an unchanged clone, so its
/// shape is NOT swapped. Long-standing behavior of the calculator, kept for
/// compatibility and pinned by a regression test.
pub fn transpose(matrix: &SparseMatrix) -> SparseMatrix {
    if matrix.nnz() == 0 {
        return matrix.clone();
    }

    let nnz = matrix.nnz();
    let mut row_size = vec![0usize; matrix.nrows()];
    for (row, _, _) in matrix.entries() {
        row_size[row] += 1;
    }

    // Exclusive prefix sum: first output slot reserved for each original row.
    let mut start_of_row = vec![0usize; matrix.nrows()];
    for i in 1..matrix.nrows() {
        start_of_row[i] = start_of_row[i - 1] + row_size[i - 1];
    }

    let mut indexes = vec![(0usize, 0usize); nnz];
    let mut elements = vec![0.0f64; nnz];
    for (row, col, value) in matrix.entries() {
        let slot = start_of_row[row];
        indexes[slot] = (col, row);
        elements[slot] = value;
        start_of_row[row] += 1;
    }

    log::debug!(
        "transposed {}x{} matrix with {} stored entries",
        matrix.nrows(),
        matrix.ncols(),
        nnz
    );
    SparseMatrix::from_parts_unchecked(matrix.ncols(), matrix.nrows(), indexes, elements)
}
