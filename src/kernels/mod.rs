//! Fused dense × sparse multiply-accumulate kernels: `C ← β·C + α·A·B`.
//!
//! Two shapes, each with a sequential and a parallel entry point:
//! - [`column_update`]: dense `A` times a CSC matrix `B`. Every column of `C`
//!   is scaled by `β`, even when the matching column of `B` is empty.
//! - [`outer_update`]: dense vector `a` times a sparse vector `bᵀ`. Only the
//!   columns of `C` named by a nonzero of `b` are touched at all.
//!
//! Shapes (and sparse indices) are validated before the first write, so a
//! rejected call leaves `C` exactly as it was.

use crate::core::traits::Scalar;
use faer::{ColMut, ColRef, MatRef};

pub mod column_update;
pub use column_update::{dense_sparse_column_update, dense_sparse_column_update_parallel};

pub mod outer_update;
pub use outer_update::{dense_sparse_outer_update, dense_sparse_outer_update_parallel};

/// `c_j ← β·c_j + A·(α·s)` for the sparse column `s = (rows, vals)`.
///
/// The contribution `A·(α·s)` is gathered into `scratch` first and added once,
/// so every caller (sequential or parallel) rounds identically.
#[inline]
pub(crate) fn fma_sparse_column<T: Scalar>(
    mut c_j: ColMut<'_, T>,
    a: MatRef<'_, T>,
    rows: &[usize],
    vals: &[T],
    alpha: T,
    beta: T,
    scratch: &mut Vec<T>,
) {
    let m = c_j.nrows();
    for i in 0..m {
        c_j[i] = beta * c_j[i];
    }
    if rows.is_empty() {
        return;
    }
    scratch.clear();
    scratch.resize(m, T::zero());
    for (&r, &v) in rows.iter().zip(vals) {
        let w = alpha * v;
        for (i, s) in scratch.iter_mut().enumerate() {
            *s = *s + a[(i, r)] * w;
        }
    }
    for (i, &s) in scratch.iter().enumerate() {
        c_j[i] = c_j[i] + s;
    }
}

/// `c_j ← β·c_j + w·a`.
#[inline]
pub(crate) fn fma_outer_column<T: Scalar>(mut c_j: ColMut<'_, T>, a: ColRef<'_, T>, w: T, beta: T) {
    for i in 0..c_j.nrows() {
        c_j[i] = beta * c_j[i] + w * a[i];
    }
}
