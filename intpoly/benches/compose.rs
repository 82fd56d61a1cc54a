use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use intpoly::math::other::random_polynomial;

criterion_main!(benches);
criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = compose<4>,
              compose<8>,
              compose<16>,
);

fn compose<const DEGREE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("Composition of Polynomials of Degree {DEGREE}"));

    let outer = random_polynomial(DEGREE, 1000);
    let inner = random_polynomial(DEGREE, 1000);

    let id = BenchmarkId::new("Horner", DEGREE);
    group.bench_function(id, |b| b.iter(|| outer.compose(&inner)));

    let id = BenchmarkId::new("Evaluate", DEGREE);
    group.bench_function(id, |b| b.iter(|| outer.evaluate(inner.evaluate(1_000_003))));

    group.finish();
}
