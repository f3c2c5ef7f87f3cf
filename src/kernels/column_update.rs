//! Dense matrix × CSC matrix update, one column of `C` at a time.

use crate::core::traits::{ColumnSparse, Scalar};
use crate::error::KernelError;
use crate::kernels::fma_sparse_column;
use crate::parallel::ParallelFor;
use faer::{ColMut, MatMut, MatRef};
use tracing::{debug, instrument};

fn check_shapes<T, B>(c: &MatMut<'_, T>, a: MatRef<'_, T>, b: &B) -> Result<(), KernelError>
where
    B: ColumnSparse<T> + ?Sized,
{
    if a.ncols() != b.nrows() {
        return Err(KernelError::shape("A.ncols == B.nrows", a.ncols(), b.nrows()));
    }
    if c.nrows() != a.nrows() {
        return Err(KernelError::shape("C.nrows == A.nrows", a.nrows(), c.nrows()));
    }
    if c.ncols() != b.ncols() {
        return Err(KernelError::shape("C.ncols == B.ncols", b.ncols(), c.ncols()));
    }
    Ok(())
}

/// `C ← β·C + α·A·B` with `B` compressed by column.
///
/// Columns are processed in increasing order. A column of `B` with no stored
/// entries still scales the matching column of `C` by `β`.
///
/// # Errors
/// [`KernelError::ShapeMismatch`] if `A.ncols != B.nrows`, `C.nrows != A.nrows`
/// or `C.ncols != B.ncols`; `C` is not touched in that case.
#[instrument(level = "debug", skip_all, fields(m = a.nrows(), k = a.ncols(), n = b.ncols(), nnz = b.nnz()))]
pub fn dense_sparse_column_update<T, B>(
    c: MatMut<'_, T>,
    a: MatRef<'_, T>,
    b: &B,
    alpha: T,
    beta: T,
) -> Result<(), KernelError>
where
    T: Scalar,
    B: ColumnSparse<T> + ?Sized,
{
    check_shapes(&c, a, b).inspect_err(|e| debug!(error = %e, "column update rejected"))?;
    let mut scratch = Vec::with_capacity(a.nrows());
    for (j, c_j) in c.col_iter_mut().enumerate() {
        let (rows, vals) = b.col(j);
        fma_sparse_column(c_j, a, rows, vals, alpha, beta, &mut scratch);
    }
    Ok(())
}

/// Parallel [`dense_sparse_column_update`]: each column of `C` is one work unit
/// handed to `exec`.
///
/// Distinct columns of `C` never alias, and `A`/`B` are only read, so workers
/// need no synchronisation. The result is bit-identical to the sequential one.
#[instrument(level = "debug", skip_all, fields(m = a.nrows(), k = a.ncols(), n = b.ncols(), nnz = b.nnz(), workers = exec.workers()))]
pub fn dense_sparse_column_update_parallel<T, B, P>(
    exec: &P,
    c: MatMut<'_, T>,
    a: MatRef<'_, T>,
    b: &B,
    alpha: T,
    beta: T,
) -> Result<(), KernelError>
where
    T: Scalar,
    B: ColumnSparse<T> + Sync + ?Sized,
    P: ParallelFor,
{
    check_shapes(&c, a, b).inspect_err(|e| debug!(error = %e, "column update rejected"))?;
    let columns: Vec<(usize, ColMut<'_, T>)> = c.col_iter_mut().enumerate().collect();
    exec.for_each(columns, |(j, c_j)| {
        let (rows, vals) = b.col(j);
        let mut scratch = Vec::new();
        fma_sparse_column(c_j, a, rows, vals, alpha, beta, &mut scratch);
    });
    Ok(())
}
