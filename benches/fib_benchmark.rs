use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fibonacci_strategies::fibonacci;
use fibonacci_strategies::memo::MemoCache;

fn criterion_benchmark(c: &mut Criterion) {
    let size = black_box(1000i64);

    c.bench_function(format!("fib_seq_iterative {size}").as_str(), |b| {
        b.iter(|| fibonacci::seq_iterative(size))
    });

    c.bench_function(format!("fib_seq_memoized {size}").as_str(), |b| {
        b.iter(|| fibonacci::seq_memoized(size))
    });

    c.bench_function(format!("fib_nth_iterative {size}").as_str(), |b| {
        b.iter(|| fibonacci::nth_iterative(size))
    });

    c.bench_function(format!("fib_nth_memoized_fresh_cache {size}").as_str(), |b| {
        b.iter(|| fibonacci::nth_memoized(size))
    });

    c.bench_function(format!("fib_nth_memoized_warm_cache {size}").as_str(), |b| {
        let mut cache = MemoCache::new();
        let _ = fibonacci::nth_memoized_with(size, &mut cache);
        b.iter(|| fibonacci::nth_memoized_with(size, &mut cache))
    });

    // Naive recursion is exponential; keep the index small so the comparison
    // finishes in reasonable time while still showing the blowup.
    let small = black_box(20i64);
    c.bench_function(format!("fib_nth_naive {small}").as_str(), |b| {
        b.iter(|| fibonacci::nth_naive(small))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
