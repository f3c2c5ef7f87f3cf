//! `ColumnSparse` for faer's own CSC types.
//!
//! Lets callers that already hold a `faer::sparse::SparseColMat` (or a view of
//! one) hand it straight to the kernels without going through `CscMatrix`.
//! Dimensions are read off the symbolic structure.

use crate::core::traits::ColumnSparse;
use faer::sparse::{SparseColMat, SparseColMatRef};

impl<'a, T> ColumnSparse<T> for SparseColMatRef<'a, usize, T> {
    fn nrows(&self) -> usize {
        self.symbolic().nrows()
    }
    fn ncols(&self) -> usize {
        self.symbolic().ncols()
    }
    fn nnz(&self) -> usize {
        self.symbolic().compute_nnz()
    }
    fn col(&self, j: usize) -> (&[usize], &[T]) {
        (self.row_idx_of_col_raw(j), self.val_of_col(j))
    }
}

impl<T> ColumnSparse<T> for SparseColMat<usize, T> {
    fn nrows(&self) -> usize {
        self.as_ref().symbolic().nrows()
    }
    fn ncols(&self) -> usize {
        self.as_ref().symbolic().ncols()
    }
    fn nnz(&self) -> usize {
        self.as_ref().symbolic().compute_nnz()
    }
    fn col(&self, j: usize) -> (&[usize], &[T]) {
        let view = self.as_ref();
        (view.row_idx_of_col_raw(j), view.val_of_col(j))
    }
}
