use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lwe_core::{generate_keys_with, LweParams};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn keygen_benchmark(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut group = c.benchmark_group("generate_keys");

    for n in [4, 64, 256, 512] {
        let params = LweParams::new(n, 65521, 4);

        group.bench_with_input(BenchmarkId::new("uniform", n), &params, |b, params| {
            b.iter(|| generate_keys_with(params, &mut rng).unwrap());
        });

        let gaussian = params.clone().with_gaussian_noise(1.5);
        group.bench_with_input(BenchmarkId::new("gaussian", n), &gaussian, |b, params| {
            b.iter(|| generate_keys_with(params, &mut rng).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, keygen_benchmark);
criterion_main!(benches);
