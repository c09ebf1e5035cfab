//! Matrix algebra over [`SparseMatrix`](crate::SparseMatrix).
pub mod arith;
pub mod multiply;
pub mod transpose;

pub use arith::{add, subtract};
pub use multiply::multiply;
pub use transpose::transpose;
