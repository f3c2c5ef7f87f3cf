//! Dense vector × sparse vector rank-1 update, `C ← β·C + α·a·bᵀ` on the
//! support of `b`.

use crate::core::traits::{Scalar, SparseVector};
use crate::error::KernelError;
use crate::kernels::fma_outer_column;
use crate::matrix::sparse::check_indices;
use crate::parallel::ParallelFor;
use faer::{ColMut, ColRef, MatMut};
use tracing::{debug, instrument};

fn check_shapes<T, V>(c: &MatMut<'_, T>, a: ColRef<'_, T>, b: &V) -> Result<(), KernelError>
where
    V: SparseVector<T> + ?Sized,
{
    let n = c.ncols();
    if a.nrows() != c.nrows() {
        return Err(KernelError::shape("a.len == C.nrows", c.nrows(), a.nrows()));
    }
    if b.logical_len() != n {
        return Err(KernelError::shape("b.len == C.ncols", n, b.logical_len()));
    }
    if b.values().len() != b.indices().len() {
        return Err(KernelError::shape("b.values == b.indices", b.indices().len(), b.values().len()));
    }
    // uniqueness keeps every column owned by a single work unit
    check_indices(b.indices(), n)
}

/// `C[:, idx] ← β·C[:, idx] + (α·val)·a` for every nonzero `(idx, val)` of `b`,
/// in stored order.
///
/// Columns of `C` whose index is not a nonzero of `b` are left untouched: no
/// `β` scaling, no accumulation.
///
/// # Errors
/// - [`KernelError::ShapeMismatch`] if `a.len != C.nrows` or `b.len != C.ncols`.
/// - [`KernelError::IndexOutOfRange`] if a nonzero index is `>= C.ncols`.
/// - [`KernelError::DuplicateIndex`] if `b` lists a column twice.
///
/// `C` is not touched when an error is returned.
#[instrument(level = "debug", skip_all, fields(m = a.nrows(), n = b.logical_len(), nnz = b.nnz()))]
pub fn dense_sparse_outer_update<T, V>(
    mut c: MatMut<'_, T>,
    a: ColRef<'_, T>,
    b: &V,
    alpha: T,
    beta: T,
) -> Result<(), KernelError>
where
    T: Scalar,
    V: SparseVector<T> + ?Sized,
{
    check_shapes(&c, a, b).inspect_err(|e| debug!(error = %e, "outer update rejected"))?;
    for (&idx, &val) in b.indices().iter().zip(b.values()) {
        fma_outer_column(c.as_mut().col_mut(idx), a, alpha * val, beta);
    }
    Ok(())
}

/// Parallel [`dense_sparse_outer_update`].
///
/// Work units are positions in `b`'s nonzero list, not column indices. Since the
/// indices are unique, each unit owns a different column of `C`.
#[instrument(level = "debug", skip_all, fields(m = a.nrows(), n = b.logical_len(), nnz = b.nnz(), workers = exec.workers()))]
pub fn dense_sparse_outer_update_parallel<T, V, P>(
    exec: &P,
    c: MatMut<'_, T>,
    a: ColRef<'_, T>,
    b: &V,
    alpha: T,
    beta: T,
) -> Result<(), KernelError>
where
    T: Scalar,
    V: SparseVector<T> + ?Sized,
    P: ParallelFor,
{
    let n = c.ncols();
    check_shapes(&c, a, b).inspect_err(|e| debug!(error = %e, "outer update rejected"))?;
    let (indices, values) = (b.indices(), b.values());
    // walk the columns once in index order, slotting each into its list position
    let mut order: Vec<usize> = (0..indices.len()).collect();
    order.sort_unstable_by_key(|&p| indices[p]);
    let mut slots: Vec<Option<(ColMut<'_, T>, T)>> = (0..indices.len()).map(|_| None).collect();
    let mut columns = c.col_iter_mut();
    let mut next = 0;
    for p in order {
        let idx = indices[p];
        let skip = idx.checked_sub(next).ok_or(KernelError::DuplicateIndex(idx))?;
        let c_j = columns.nth(skip).ok_or(KernelError::IndexOutOfRange { index: idx, bound: n })?;
        slots[p] = Some((c_j, alpha * values[p]));
        next = idx + 1;
    }
    let units: Vec<(ColMut<'_, T>, T)> = slots.into_iter().flatten().collect();
    exec.for_each(units, |(c_j, w)| fma_outer_column(c_j, a, w, beta));
    Ok(())
}
