//! Integration tests for sparse matrix construction and element access.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_util::{DenseMatrix, SparseMatrix};

fn fixture() -> DenseMatrix {
    DenseMatrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![0.0, 5.0, 6.0],
        vec![5.0, 0.0, 7.0],
        vec![6.0, 7.0, 0.0],
        vec![7.0, 8.0, 9.0],
    ])
    .unwrap()
}

// ---------------------------------------------------------------------------
// Raw-capacity constructor
// ---------------------------------------------------------------------------

#[test]
fn with_capacity_allocates_zeroed_slots() {
    let m = SparseMatrix::with_capacity(3, 2, 2).unwrap();
    assert_eq!(m.nnz(), 3);
    assert_eq!(m.shape(), (2, 2));
    for (row, col, value) in m.entries() {
        assert_eq!((row, col), (0, 0));
        assert_eq!(value, 0.0);
    }
}

#[test]
fn with_capacity_zero_entries() {
    let m = SparseMatrix::with_capacity(0, 4, 5).unwrap();
    assert_eq!(m.nnz(), 0);
    assert_eq!(m.shape(), (4, 5));
}

#[test]
fn with_capacity_rejects_oversized_count() {
    let err = SparseMatrix::with_capacity(5, 2, 2).unwrap_err();
    assert_eq!(err.param(), Some("elements_count"));
    assert!(err.message().contains("more than"));
}

#[test]
fn with_capacity_rejects_negative_count() {
    let err = SparseMatrix::with_capacity(-1, 2, 2).unwrap_err();
    assert_eq!(err.param(), Some("elements_count"));
    assert!(err.message().contains("less than zero"));
}

#[test]
fn with_capacity_negative_rows_fails_capacity_check_first() {
    // rows * cols is negative here, so the capacity check trips before the
    // negative-rows check ever runs. Matches the documented validation order.
    let err = SparseMatrix::with_capacity(0, -1, 2).unwrap_err();
    assert_eq!(err.param(), Some("elements_count"));
}

#[test]
fn with_capacity_rejects_negative_rows() {
    // Both counts negative makes the product positive, so validation reaches
    // the rows check.
    let err = SparseMatrix::with_capacity(1, -1, -2).unwrap_err();
    assert_eq!(err.param(), Some("rows"));
}

#[test]
fn with_capacity_rejects_negative_cols() {
    let err = SparseMatrix::with_capacity(0, 0, -1).unwrap_err();
    assert_eq!(err.param(), Some("cols"));
}

// ---------------------------------------------------------------------------
// set_entry
// ---------------------------------------------------------------------------

#[test]
fn set_entry_populates_slots() {
    let mut m = SparseMatrix::with_capacity(2, 2, 3).unwrap();
    m.set_entry(0, 0, 1, 4.0).unwrap();
    m.set_entry(1, 1, 2, -2.5).unwrap();
    assert_eq!(m.get(0, 1).unwrap(), 4.0);
    assert_eq!(m.get(1, 2).unwrap(), -2.5);
    assert_eq!(m.get(0, 0).unwrap(), 0.0);
}

#[test]
fn set_entry_rejects_slot_out_of_range() {
    let mut m = SparseMatrix::with_capacity(1, 2, 2).unwrap();
    let err = m.set_entry(1, 0, 0, 1.0).unwrap_err();
    assert_eq!(err.param(), Some("slot"));
}

#[test]
fn set_entry_rejects_coordinate_out_of_shape() {
    let mut m = SparseMatrix::with_capacity(1, 2, 2).unwrap();
    assert!(m.set_entry(0, 2, 0, 1.0).is_err());
    assert!(m.set_entry(0, 0, 2, 1.0).is_err());
}

// ---------------------------------------------------------------------------
// Dense-to-sparse conversion and element access
// ---------------------------------------------------------------------------

#[test]
fn from_dense_matches_every_cell() {
    let dense = fixture();
    let sparse = SparseMatrix::from_dense(&dense);
    assert_eq!(sparse.shape(), dense.shape());
    assert_eq!(sparse.nnz(), 12); // three cells of the fixture are zero
    for i in 0..dense.nrows() {
        for j in 0..dense.ncols() {
            assert_eq!(sparse.get(i, j).unwrap(), dense[(i, j)]);
        }
    }
}

#[test]
fn from_dense_keeps_row_major_insertion_order() {
    let dense =
        DenseMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0], vec![0.0, 3.0]]).unwrap();
    let sparse = SparseMatrix::from_dense(&dense);
    let entries: Vec<_> = sparse.entries().collect();
    assert_eq!(entries, vec![(0, 1, 1.0), (1, 0, 2.0), (2, 1, 3.0)]);
}

#[test]
fn from_dense_of_all_zeros_stores_nothing() {
    let sparse = SparseMatrix::from_dense(&DenseMatrix::zeros(3, 4));
    assert_eq!(sparse.nnz(), 0);
    assert_eq!(sparse.shape(), (3, 4));
}

#[test]
fn get_out_of_range_errors() {
    let sparse = SparseMatrix::from_dense(&fixture());
    let err = sparse.get(5, 0).unwrap_err();
    assert_eq!(err.message(), "index is out of range of original matrix");
    assert!(sparse.get(0, 3).is_err());
    assert!(sparse.get(5, 3).is_err());
}

#[test]
fn to_dense_round_trips() {
    let dense = fixture();
    let sparse = SparseMatrix::from_dense(&dense);
    assert_eq!(sparse.to_dense(), dense);
}

#[test]
fn random_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let rows = rng.gen_range(0..8);
        let cols = rng.gen_range(0..8);
        let mut dense = DenseMatrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                // Roughly half the cells stay zero.
                if rng.gen_bool(0.5) {
                    dense[(i, j)] = rng.gen_range(-10..=10) as f64;
                }
            }
        }
        let sparse = SparseMatrix::from_dense(&dense);
        assert_eq!(sparse.to_dense(), dense);
        assert!(sparse.nnz() <= rows * cols);
    }
}
