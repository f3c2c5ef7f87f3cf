//! Dense-matrix constructors on top of Faer.
//!
//! The kernels themselves only see `faer::MatRef` / `faer::MatMut` views; this
//! trait is a convenience for building the owning `faer::Mat<T>` from raw data
//! with a shape check instead of a panic.

use crate::core::traits::Scalar;
use crate::error::KernelError;
use faer::Mat;

pub trait DenseMatrix<T>: Sized {
    /// Construct from raw column-major storage.
    fn from_col_major(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, KernelError>;
    /// Construct from a list of equally long rows.
    fn from_rows(rows: &[Vec<T>]) -> Result<Self, KernelError>;
}

impl<T: Scalar> DenseMatrix<T> for Mat<T> {
    fn from_col_major(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, KernelError> {
        if data.len() != nrows * ncols {
            return Err(KernelError::shape("data.len == nrows * ncols", nrows * ncols, data.len()));
        }
        Ok(Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i]))
    }

    fn from_rows(rows: &[Vec<T>]) -> Result<Self, KernelError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != ncols) {
            return Err(KernelError::shape("row length", ncols, bad.len()));
        }
        Ok(Mat::from_fn(nrows, ncols, |i, j| rows[i][j]))
    }
}
