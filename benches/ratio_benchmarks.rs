//! Benchmarks comparing Ratio<T> against num-rational
//!
//! Run with: cargo bench --bench ratio_benchmarks
//!
//! Each backing width is benchmarked against num-rational's `Ratio` over the
//! same primitive, which also reduces eagerly but does not check for
//! overflow:
//! - i32: wide type i64
//! - i64: wide type i128
//!
//! Key Performance Metrics:
//! - Construction (reduction and sign normalization)
//! - Arithmetic operations (add, mul, div)
//! - Comparison operations
//! - GCD computation
//! - Real-world workloads (e series, telescoping product, sorting)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exact_ratio::{series, FactorialCache, Ratio, WideInteger};
use num_rational::Ratio as NumRatio;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Macro to generate complete benchmark suite for a given integer type
macro_rules! generate_ratio_benchmarks {
    ($mod_name:ident, $int_type:ty, $size_name:expr) => {
        mod $mod_name {
            use super::*;

            type TestInt = $int_type;
            type TestRatio = Ratio<$int_type>;
            type NumRational = NumRatio<$int_type>;

            // ====================================================================
            // BASIC OPERATIONS
            // ====================================================================

            /// Benchmark constructing and reducing a fraction
            pub fn bench_new(c: &mut Criterion) {
                let bench_name = format!("{}/new", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                group.bench_function("Ratio", |b| {
                    b.iter(|| {
                        let r = TestRatio::new(black_box(12345), black_box(-67890)).unwrap();
                        black_box(r);
                    })
                });

                group.bench_function("num-rational", |b| {
                    b.iter(|| {
                        let r = NumRational::new(black_box(12345), black_box(-67890));
                        black_box(r);
                    })
                });

                group.finish();
            }

            /// Benchmark addition: same denominator (fast path) and different denominators
            pub fn bench_addition(c: &mut Criterion) {
                let bench_name = format!("{}/addition", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let test_cases: Vec<(&str, (TestInt, TestInt), (TestInt, TestInt))> = vec![
                    ("same_denom", (1, 7), (2, 7)),
                    ("diff_denom", (1, 2), (1, 3)),
                    ("large", (9999, 10000), (9998, 10001)),
                ];

                for (name, (n1, d1), (n2, d2)) in test_cases {
                    let r1 = TestRatio::new(n1, d1).unwrap();
                    let r2 = TestRatio::new(n2, d2).unwrap();
                    let m1 = NumRational::new(n1, d1);
                    let m2 = NumRational::new(n2, d2);

                    group.bench_with_input(BenchmarkId::new("Ratio", name), &(r1, r2), |b, (x, y)| {
                        b.iter(|| black_box(black_box(x).checked_add(black_box(y)).unwrap()))
                    });

                    group.bench_with_input(
                        BenchmarkId::new("num-rational", name),
                        &(m1, m2),
                        |b, (x, y)| b.iter(|| black_box(black_box(x) + black_box(y))),
                    );
                }

                group.finish();
            }

            /// Benchmark multiplication and division
            pub fn bench_multiplication(c: &mut Criterion) {
                let bench_name = format!("{}/multiplication", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let r1 = TestRatio::new(355, 113).unwrap();
                let r2 = TestRatio::new(-113, 710).unwrap();
                let m1 = NumRational::new(355, 113);
                let m2 = NumRational::new(-113, 710);

                group.bench_function("Ratio/mul", |b| {
                    b.iter(|| black_box(black_box(&r1) * black_box(&r2)))
                });
                group.bench_function("num-rational/mul", |b| {
                    b.iter(|| black_box(black_box(&m1) * black_box(&m2)))
                });
                group.bench_function("Ratio/div", |b| {
                    b.iter(|| black_box(black_box(&r1) / black_box(&r2)))
                });
                group.bench_function("num-rational/div", |b| {
                    b.iter(|| black_box(black_box(&m1) / black_box(&m2)))
                });

                group.finish();
            }

            /// Benchmark ordering: exact cross-multiplication against the floating comparison
            pub fn bench_comparison(c: &mut Criterion) {
                let bench_name = format!("{}/comparison", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let r1 = TestRatio::new(TestInt::MAX - 1, TestInt::MAX).unwrap();
                let r2 = TestRatio::new(TestInt::MAX - 2, TestInt::MAX - 1).unwrap();
                let m1 = NumRational::new(TestInt::MAX - 1, TestInt::MAX);
                let m2 = NumRational::new(TestInt::MAX - 2, TestInt::MAX - 1);

                group.bench_function("Ratio/cmp", |b| {
                    b.iter(|| black_box(black_box(&r1).cmp(black_box(&r2))))
                });
                group.bench_function("Ratio/cmp_approx", |b| {
                    b.iter(|| black_box(black_box(&r1).cmp_approx(black_box(&r2))))
                });
                group.bench_function("num-rational/cmp", |b| {
                    b.iter(|| black_box(black_box(&m1).cmp(black_box(&m2))))
                });

                group.finish();
            }

            /// Benchmark the GCD used for reduction against num-integer
            pub fn bench_gcd(c: &mut Criterion) {
                let bench_name = format!("{}/gcd", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                let a: TestInt = TestInt::MAX / 3 * 2;
                let b_val: TestInt = TestInt::MAX / 5 * 4;

                group.bench_function("binary", |b| {
                    b.iter(|| black_box(<TestInt as WideInteger>::gcd(black_box(a), black_box(b_val))))
                });
                group.bench_function("num-integer", |b| {
                    use num_integer::Integer;
                    b.iter(|| black_box(black_box(a).gcd(&black_box(b_val))))
                });

                group.finish();
            }

            // ====================================================================
            // REAL-WORLD WORKLOADS
            // ====================================================================

            /// Benchmark the telescoping product 1/2 * 2/3 * ... * 99/100
            pub fn bench_telescoping_product(c: &mut Criterion) {
                let bench_name = format!("{}/telescoping_product", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                group.bench_function("Ratio", |b| {
                    b.iter(|| {
                        let product: TestRatio = (1..100 as TestInt)
                            .map(|t| TestRatio::new(t, t + 1).unwrap())
                            .product();
                        black_box(product)
                    })
                });

                group.bench_function("num-rational", |b| {
                    b.iter(|| {
                        let product: NumRational = (1..100 as TestInt)
                            .map(|t| NumRational::new(t, t + 1))
                            .product();
                        black_box(product)
                    })
                });

                group.finish();
            }

            /// Benchmark sorting random fractions
            pub fn bench_sort(c: &mut Criterion) {
                let bench_name = format!("{}/sort", $size_name);
                let mut group = c.benchmark_group(&bench_name);

                for count in [20usize, 1000] {
                    let mut rng = ChaCha8Rng::seed_from_u64(42);
                    let values: Vec<TestRatio> = series::random_ratios(&mut rng, count, -50..50, -50..50)
                        .unwrap()
                        .into_iter()
                        .map(|r| TestRatio::new(r.numer() as TestInt, r.denom() as TestInt).unwrap())
                        .collect();

                    group.bench_with_input(BenchmarkId::new("Ratio", count), &values, |b, values| {
                        b.iter(|| {
                            let mut sorted = values.clone();
                            sorted.sort();
                            black_box(sorted)
                        })
                    });
                }

                group.finish();
            }

            /// Register all benchmarks for this integer size
            pub fn register_all(c: &mut Criterion) {
                bench_new(c);
                bench_addition(c);
                bench_multiplication(c);
                bench_comparison(c);
                bench_gcd(c);
                bench_telescoping_product(c);
                bench_sort(c);
            }
        }
    };
}

// ============================================================================
// INSTANTIATE BENCHMARK SUITES FOR EACH INTEGER SIZE
// ============================================================================

generate_ratio_benchmarks!(i32_benches, i32, "i32");
generate_ratio_benchmarks!(i64_benches, i64, "i64");

/// Benchmark the memoized factorial and the e series built on it
fn bench_e_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("e_series");

    group.bench_function("cold_cache", |b| {
        b.iter(|| {
            let cache = FactorialCache::new();
            black_box(series::approximate_e(&cache, black_box(20)).unwrap())
        })
    });

    let warm = FactorialCache::new();
    warm.get(20).unwrap();
    group.bench_function("warm_cache", |b| {
        b.iter(|| black_box(series::approximate_e(&warm, black_box(20)).unwrap()))
    });

    group.finish();
}

// ============================================================================
// BENCHMARK GROUPS
// ============================================================================

criterion_group!(i32_benchmarks, i32_benches::register_all);

criterion_group!(i64_benchmarks, i64_benches::register_all);

criterion_group!(series_benchmarks, bench_e_series);

criterion_main!(i32_benchmarks, i64_benchmarks, series_benchmarks);
