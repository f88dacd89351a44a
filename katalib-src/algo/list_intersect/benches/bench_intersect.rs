use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use list_intersect::{
    intersection, intersection_by_length, intersection_by_marking,
};
use slist::Pool;

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");

    for &(prefix_a, prefix_b, shared_len) in
        &[(10_000, 7_000, 3_000), (10_000, 7_000, 0)]
    {
        let mut pool = Pool::new();
        let shared = pool.chain(0..shared_len, None);
        let a = pool.chain(0..prefix_a, shared);
        let b = pool.chain(0..prefix_b, shared);
        let param = format!("{prefix_a}+{prefix_b}+{shared_len}");

        group.bench_function(BenchmarkId::new("splice", &param), |bch| {
            bch.iter(|| black_box(unsafe { intersection(a, b) }))
        });
        group.bench_function(BenchmarkId::new("marking", &param), |bch| {
            bch.iter(|| black_box(unsafe { intersection_by_marking(a, b) }))
        });
        group.bench_function(BenchmarkId::new("length", &param), |bch| {
            bch.iter(|| black_box(unsafe { intersection_by_length(a, b) }))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_intersect);
criterion_main!(benches);
