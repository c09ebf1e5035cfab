//! Result rendering.
//!
//! The original calculator showed every result twice: a sparse triplet grid
//! (row / column / value) and the reconstructed dense matrix. `render_text`
//! keeps that layout as tab-separated text; `Report` is the JSON shape
//! behind `--json`.

use serde::Serialize;
use sparse_util::SparseMatrix;

/// One stored entry of a sparse matrix, as surfaced to the user.
#[derive(Debug, Serialize)]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

/// JSON-serializable summary of an operation result.
#[derive(Debug, Serialize)]
pub struct Report {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<Entry>,
}

impl Report {
    pub fn from_matrix(matrix: &SparseMatrix) -> Self {
        Self {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
            entries: matrix
                .entries()
                .map(|(row, col, value)| Entry { row, col, value })
                .collect(),
        }
    }
}

/// Renders the sparse triplet table followed by the reconstructed dense
/// grid.
pub fn render_text(matrix: &SparseMatrix) -> String {
    let mut out = String::new();
    let noun = if matrix.nnz() == 1 { "entry" } else { "entries" };
    out.push_str(&format!(
        "{} x {} matrix, {} stored {}\n",
        matrix.nrows(),
        matrix.ncols(),
        matrix.nnz(),
        noun
    ));
    out.push_str("row\tcolumn\tvalue\n");
    for (row, col, value) in matrix.entries() {
        out.push_str(&format!("{}\t{}\t{}\n", row, col, value));
    }

    let dense = matrix.to_dense();
    out.push('\n');
    for i in 0..dense.nrows() {
        let cells: Vec<String> = dense.row_slice(i).iter().map(f64::to_string).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}
