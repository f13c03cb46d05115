use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lwe_core::{decrypt, encrypt, generate_keys};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn encrypt_decrypt_benchmark(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut group = c.benchmark_group("lwe_bit");

    for n in [4, 64, 256, 512] {
        let keys = generate_keys(n, 65521, 4, &mut rng).unwrap();
        let ct = encrypt(keys.public_key(), 1, 4, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("encrypt", n), &n, |b, _| {
            b.iter(|| encrypt(keys.public_key(), black_box(1), 4, &mut rng).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("decrypt", n), &n, |b, _| {
            b.iter(|| decrypt(keys.secret_key(), black_box(&ct)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, encrypt_decrypt_benchmark);
criterion_main!(benches);
