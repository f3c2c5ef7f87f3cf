use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dsmul::{
    CscMatrix, Executor, SparseVec, dense_sparse_column_update, dense_sparse_column_update_parallel,
    dense_sparse_outer_update,
};
use faer::{Col, Mat};

fn bench_column_update_vs_faer(c: &mut Criterion) {
    let (m, k, n) = (200, 400, 400);
    let a = Mat::from_fn(m, k, |i, j| ((i * k + j) as f64).sin());
    // ~2% dense
    let b_dense = Mat::from_fn(k, n, |i, j| if (i * 31 + j * 17) % 50 == 0 { ((i + j) as f64).cos() } else { 0.0 });
    let b = CscMatrix::from_dense(b_dense.as_ref());
    let mut out = Mat::<f64>::zeros(m, n);
    let exec = Executor::default();

    c.bench_function("dsmul column update", |ben| {
        ben.iter(|| {
            dense_sparse_column_update(out.as_mut(), black_box(a.as_ref()), black_box(&b), 1.0, 0.5).unwrap();
        })
    });

    c.bench_function("dsmul column update (parallel)", |ben| {
        ben.iter(|| {
            dense_sparse_column_update_parallel(&exec, out.as_mut(), black_box(a.as_ref()), black_box(&b), 1.0, 0.5)
                .unwrap();
        })
    });

    c.bench_function("faer dense A * B", |ben| {
        ben.iter(|| {
            let ab = black_box(&a) * black_box(&b_dense);
            black_box(ab);
        })
    });
}

fn bench_outer_update(c: &mut Criterion) {
    let (m, n) = (1000, 5000);
    let a = Col::from_fn(m, |i| (i as f64).sin());
    let b_dense: Vec<f64> = (0..n).map(|j| if j % 20 == 0 { j as f64 } else { 0.0 }).collect();
    let b = SparseVec::from_dense(&b_dense);
    let mut out = Mat::<f64>::zeros(m, n);

    c.bench_function("dsmul outer update", |ben| {
        ben.iter(|| {
            dense_sparse_outer_update(out.as_mut(), black_box(a.as_ref()), black_box(&b), 1.0, 0.5).unwrap();
        })
    });
}

criterion_group!(benches, bench_column_update_vs_faer, bench_outer_update);
criterion_main!(benches);
