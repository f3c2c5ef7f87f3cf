//! Matrix module: dense constructors and sparse containers.

pub mod dense;
pub use dense::DenseMatrix;
pub mod sparse;
pub use sparse::{CscMatrix, SparseVec, SparseVecView};
