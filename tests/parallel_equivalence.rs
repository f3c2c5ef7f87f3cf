//! Sequential vs. parallel kernels must agree bit-for-bit.
//!
//! Each column (or nonzero) update is self-contained, so neither the number of
//! workers nor the task granularity may change a single bit of the output.
//! Inputs are random with 0%, 50% and 99% zeros.

use dsmul::{
    CscMatrix, Executor, ParallelFor, ParallelOptions, Serial, SparseVec, dense_sparse_column_update,
    dense_sparse_column_update_parallel, dense_sparse_outer_update, dense_sparse_outer_update_parallel,
};
use faer::{Col, Mat};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ZERO_FRACS: [f64; 3] = [0.0, 0.5, 0.99];

fn random_values(rng: &mut StdRng, len: usize, zero_frac: f64) -> Vec<f64> {
    (0..len)
        .map(|_| if rng.gen_bool(zero_frac) { 0.0 } else { rng.gen_range(-10.0..10.0) })
        .collect()
}

fn random_mat(rng: &mut StdRng, nrows: usize, ncols: usize, zero_frac: f64) -> Mat<f64> {
    let vals = random_values(rng, nrows * ncols, zero_frac);
    Mat::from_fn(nrows, ncols, |i, j| vals[j * nrows + i])
}

fn executors() -> Vec<Executor> {
    let mut out = vec![Executor::serial(), Executor::default()];
    for threads in [1, 2, 3, 8] {
        for min_len in [1, 7] {
            let opts = ParallelOptions { num_threads: Some(threads), min_len };
            out.push(Executor::from_options(&opts).unwrap());
        }
    }
    out
}

fn assert_same_bits(x: &Mat<f64>, y: &Mat<f64>, ctx: &str) {
    for j in 0..x.ncols() {
        for i in 0..x.nrows() {
            assert_eq!(x[(i, j)].to_bits(), y[(i, j)].to_bits(), "{ctx}: mismatch at ({i}, {j})");
        }
    }
}

#[test]
fn column_update_parallel_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(2024);
    let execs = executors();
    for zero_frac in ZERO_FRACS {
        let (m, k, n) = (13, 17, 41);
        let a = random_mat(&mut rng, m, k, 0.0);
        let b = CscMatrix::from_dense(random_mat(&mut rng, k, n, zero_frac).as_ref());
        let c0 = random_mat(&mut rng, m, n, 0.0);
        let (alpha, beta) = (rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));

        let mut c_seq = c0.clone();
        dense_sparse_column_update(c_seq.as_mut(), a.as_ref(), &b, alpha, beta).unwrap();

        for exec in &execs {
            let mut c_par = c0.clone();
            dense_sparse_column_update_parallel(exec, c_par.as_mut(), a.as_ref(), &b, alpha, beta).unwrap();
            let ctx = format!("zero_frac={zero_frac} workers={}", exec.workers());
            assert_same_bits(&c_seq, &c_par, &ctx);
        }
    }
}

#[test]
fn outer_update_parallel_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(77);
    let execs = executors();
    for zero_frac in ZERO_FRACS {
        let (m, n) = (11, 300);
        let a_vals = random_values(&mut rng, m, 0.0);
        let a = Col::from_fn(m, |i| a_vals[i]);
        let b = SparseVec::from_dense(&random_values(&mut rng, n, zero_frac));
        let c0 = random_mat(&mut rng, m, n, 0.0);
        let (alpha, beta) = (rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));

        let mut c_seq = c0.clone();
        dense_sparse_outer_update(c_seq.as_mut(), a.as_ref(), &b, alpha, beta).unwrap();

        for exec in &execs {
            let mut c_par = c0.clone();
            dense_sparse_outer_update_parallel(exec, c_par.as_mut(), a.as_ref(), &b, alpha, beta).unwrap();
            let ctx = format!("zero_frac={zero_frac} workers={}", exec.workers());
            assert_same_bits(&c_seq, &c_par, &ctx);
        }
    }
}

/// The bare `Serial` executor is also a valid parallel-for.
#[test]
fn serial_executor_is_accepted_directly() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_mat(&mut rng, 4, 6, 0.0);
    let b = CscMatrix::from_dense(random_mat(&mut rng, 6, 9, 0.5).as_ref());
    let c0 = random_mat(&mut rng, 4, 9, 0.0);
    let mut c_seq = c0.clone();
    let mut c_ser = c0.clone();
    dense_sparse_column_update(c_seq.as_mut(), a.as_ref(), &b, 0.25, -1.0).unwrap();
    dense_sparse_column_update_parallel(&Serial, c_ser.as_mut(), a.as_ref(), &b, 0.25, -1.0).unwrap();
    assert_same_bits(&c_seq, &c_ser, "serial");
}
