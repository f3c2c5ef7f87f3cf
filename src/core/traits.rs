//! Core traits for dsmul.

use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Mul};

/// Element type the kernels compute with: anything closed under `+` and `*`
/// with additive and multiplicative identities.
pub trait Scalar:
    Copy + Send + Sync + Zero + One + Add<Output = Self> + Mul<Output = Self> + PartialEq + Debug + 'static
{
}

impl<T> Scalar for T where
    T: Copy + Send + Sync + Zero + One + Add<Output = T> + Mul<Output = T> + PartialEq + Debug + 'static
{
}

/// Read-only column access into a compressed-sparse-column matrix.
pub trait ColumnSparse<T> {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// Number of stored entries.
    fn nnz(&self) -> usize;
    /// Row indices and values of column `j`, in stored order.
    fn col(&self, j: usize) -> (&[usize], &[T]);
}

/// A sparse vector given by explicit nonzero index/value arrays.
pub trait SparseVector<T> {
    /// Logical length (number of addressable positions).
    fn logical_len(&self) -> usize;
    /// Nonzero positions, in stored order.
    fn indices(&self) -> &[usize];
    /// Nonzero values, parallel to `indices`.
    fn values(&self) -> &[T];

    fn nnz(&self) -> usize {
        self.indices().len()
    }
}
