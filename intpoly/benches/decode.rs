use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use intpoly::math::decoder::encode;
use intpoly::math::other::random_polynomial;
use intpoly::prelude::*;

criterion_main!(benches);
criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = decode_digits<{ 1 << 6 }>,
              decode_digits<{ 1 << 10 }>,
);

fn decode_digits<const NUM_COEFFICIENTS: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "Recovering {NUM_COEFFICIENTS} Coefficients from Two Evaluations"
    ));
    group.throughput(Throughput::Elements(NUM_COEFFICIENTS as u64));

    // squaring makes all coefficients non-negative
    let coefficients = random_polynomial(NUM_COEFFICIENTS - 1, u64::MAX)
        .into_coefficients()
        .into_iter()
        .map(|c| c.pow(2).magnitude().clone())
        .collect::<Vec<BigUint>>();
    let seed = coefficients.iter().sum::<BigUint>();
    let target = encode(&seed, &coefficients);

    let id = BenchmarkId::new("Decode", NUM_COEFFICIENTS);
    group.bench_function(id, |b| b.iter(|| decode(&seed, &target)));

    let id = BenchmarkId::new("Recover polynomial", NUM_COEFFICIENTS);
    group.bench_function(id, |b| b.iter(|| recover_polynomial(&seed, &target)));

    group.finish();
}
