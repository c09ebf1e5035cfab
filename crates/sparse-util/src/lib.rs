//! sparse-util: a coordinate-list (COO) sparse matrix and the small set of
//! linear-algebra operations the sparse calculator needs.
//!
//! Matrices enter as a dense [`DenseMatrix`] (exactly-zero cells are dropped
//! on conversion) or are allocated with an explicit capacity and populated by
//! hand. On top of the store sit transpose, addition, subtraction and
//! multiplication. Lookups are linear scans and the binary operations go
//! through a dense accumulator, which keeps the crate small and is perfectly
//! adequate at the manually-entered-matrix scale it targets.
pub mod coo;
pub mod dense;
pub mod error;
pub mod ops;

pub use coo::SparseMatrix;
pub use dense::DenseMatrix;
pub use error::InvalidArgument;
pub use ops::{add, multiply, subtract, transpose};
