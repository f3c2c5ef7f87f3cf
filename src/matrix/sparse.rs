// Sparse containers: CSC matrix and index/value sparse vectors

use crate::core::traits::{ColumnSparse, Scalar, SparseVector};
use crate::error::KernelError;
use faer::sparse::{SparseColMat, SparseColMatRef, SymbolicSparseColMat};
use faer::{Mat, MatRef};

/// Compressed-sparse-column matrix backed by faer.
#[derive(Debug, Clone)]
pub struct CscMatrix<T> {
    inner: SparseColMat<usize, T>,
}

fn invalid(msg: impl Into<String>) -> KernelError {
    KernelError::InvalidStructure(msg.into())
}

/// Structural checks faer would otherwise turn into panics.
fn validate_csc(
    nrows: usize,
    ncols: usize,
    col_ptr: &[usize],
    row_idx: &[usize],
    nvalues: usize,
) -> Result<(), KernelError> {
    let Some(expected_len) = ncols.checked_add(1) else {
        return Err(invalid("ncols overflow when adding 1"));
    };
    if col_ptr.len() != expected_len {
        return Err(invalid("col_ptr length must be ncols + 1"));
    }
    if row_idx.len() != nvalues {
        return Err(invalid("row_idx and values must have equal length"));
    }
    if col_ptr[0] != 0 {
        return Err(invalid("col_ptr first element must be 0"));
    }
    if col_ptr[ncols] != row_idx.len() {
        return Err(invalid("col_ptr last element must equal nnz"));
    }
    for (j, w) in col_ptr.windows(2).enumerate() {
        if w[0] > w[1] || w[1] > row_idx.len() {
            return Err(invalid(format!("invalid col_ptr range at column {j}")));
        }
        let rows = &row_idx[w[0]..w[1]];
        if let Some(&r) = rows.iter().find(|&&r| r >= nrows) {
            return Err(invalid(format!("row index {r} out of bounds in column {j}")));
        }
        if rows.windows(2).any(|p| p[0] >= p[1]) {
            return Err(invalid(format!("row indices of column {j} are not strictly increasing")));
        }
    }
    Ok(())
}

/// Every index below `bound` and no index repeated; O(nnz log nnz), independent
/// of `bound`. Out-of-range indices are reported in stored order first.
pub(crate) fn check_indices(indices: &[usize], bound: usize) -> Result<(), KernelError> {
    if let Some(&index) = indices.iter().find(|&&i| i >= bound) {
        return Err(KernelError::IndexOutOfRange { index, bound });
    }
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    match sorted.windows(2).find(|w| w[0] == w[1]) {
        Some(w) => Err(KernelError::DuplicateIndex(w[0])),
        None => Ok(()),
    }
}

impl<T: Scalar> CscMatrix<T> {
    /// Build a CSC from raw col-ptr, row-idx, and values.
    pub fn from_csc(
        nrows: usize,
        ncols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, KernelError> {
        validate_csc(nrows, ncols, &col_ptr, &row_idx, values.len())?;
        let symbolic = SymbolicSparseColMat::new_checked(nrows, ncols, col_ptr, None, row_idx);
        Ok(Self { inner: SparseColMat::new(symbolic, values) })
    }

    /// Keep the entries of `a` that differ from zero.
    pub fn from_dense(a: MatRef<'_, T>) -> Self {
        let (nrows, ncols) = (a.nrows(), a.ncols());
        let mut col_ptr = Vec::with_capacity(ncols + 1);
        let mut row_idx = Vec::new();
        let mut values = Vec::new();
        col_ptr.push(0);
        for j in 0..ncols {
            for i in 0..nrows {
                let v = a[(i, j)];
                if v != T::zero() {
                    row_idx.push(i);
                    values.push(v);
                }
            }
            col_ptr.push(row_idx.len());
        }
        let symbolic = SymbolicSparseColMat::new_checked(nrows, ncols, col_ptr, None, row_idx);
        Self { inner: SparseColMat::new(symbolic, values) }
    }

    /// Expand into a dense matrix.
    pub fn to_dense(&self) -> Mat<T> {
        let mut dense = Mat::from_fn(self.nrows(), self.ncols(), |_, _| T::zero());
        for j in 0..self.ncols() {
            let (rows, vals) = self.col(j);
            for (&i, &v) in rows.iter().zip(vals) {
                dense[(i, j)] = v;
            }
        }
        dense
    }

    pub fn as_ref(&self) -> SparseColMatRef<'_, usize, T> {
        self.inner.as_ref()
    }

    pub fn into_inner(self) -> SparseColMat<usize, T> {
        self.inner
    }
}

impl<T: Scalar> ColumnSparse<T> for CscMatrix<T> {
    fn nrows(&self) -> usize {
        ColumnSparse::nrows(&self.inner)
    }
    fn ncols(&self) -> usize {
        ColumnSparse::ncols(&self.inner)
    }
    fn nnz(&self) -> usize {
        ColumnSparse::nnz(&self.inner)
    }
    fn col(&self, j: usize) -> (&[usize], &[T]) {
        ColumnSparse::col(&self.inner, j)
    }
}

/// Owned sparse vector with validated, unique indices.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVec<T> {
    len: usize,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> SparseVec<T> {
    pub fn new(len: usize, indices: Vec<usize>, values: Vec<T>) -> Result<Self, KernelError> {
        if indices.len() != values.len() {
            return Err(KernelError::shape("values.len == indices.len", indices.len(), values.len()));
        }
        check_indices(&indices, len)?;
        Ok(Self { len, indices, values })
    }

    pub fn from_dense(dense: &[T]) -> Self {
        let (indices, values) = dense
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != T::zero())
            .map(|(i, &v)| (i, v))
            .unzip();
        Self { len: dense.len(), indices, values }
    }

    /// `(index, value)` pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn view(&self) -> SparseVecView<'_, T> {
        SparseVecView { len: self.len, indices: &self.indices, values: &self.values }
    }
}

impl<T> SparseVector<T> for SparseVec<T> {
    fn logical_len(&self) -> usize {
        self.len
    }
    fn indices(&self) -> &[usize] {
        &self.indices
    }
    fn values(&self) -> &[T] {
        &self.values
    }
}

/// Borrowed sparse vector. Only the array lengths are checked on construction;
/// index bounds and uniqueness are checked by the kernels that consume it.
#[derive(Debug, Clone, Copy)]
pub struct SparseVecView<'a, T> {
    len: usize,
    indices: &'a [usize],
    values: &'a [T],
}

impl<'a, T> SparseVecView<'a, T> {
    pub fn new(len: usize, indices: &'a [usize], values: &'a [T]) -> Result<Self, KernelError> {
        if indices.len() != values.len() {
            return Err(KernelError::shape("values.len == indices.len", indices.len(), values.len()));
        }
        Ok(Self { len, indices, values })
    }
}

impl<T> SparseVector<T> for SparseVecView<'_, T> {
    fn logical_len(&self) -> usize {
        self.len
    }
    fn indices(&self) -> &[usize] {
        self.indices
    }
    fn values(&self) -> &[T] {
        self.values
    }
}
