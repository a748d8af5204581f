use criterion::{Criterion, criterion_group, criterion_main};
use nebula_random::rng::{ChaCha20Rng, RawGenerator, Xorshift64Star};
use nebula_random::uniform::Uniform;
use std::hint::black_box;

pub fn bench_raw(c: &mut Criterion) {
    let mut xorshift = Xorshift64Star::new(1);
    let mut chacha = ChaCha20Rng::from_state([1u8; 32]);

    c.bench_function("xorshift64* next_word", |b| b.iter(|| black_box(xorshift.next_word())));
    c.bench_function("chacha20 next_word", |b| b.iter(|| black_box(chacha.next_word())));
}

pub fn bench_uniform(c: &mut Criterion) {
    let mut rng = Xorshift64Star::new(2);

    c.bench_function("uniform_in u32 [0, 9]", |b| {
        b.iter(|| rng.uniform_in(black_box(0u32), black_box(9)))
    });

    c.bench_function("uniform_in i64 [-1e9, 1e9]", |b| {
        b.iter(|| rng.uniform_in(black_box(-1_000_000_000i64), black_box(1_000_000_000)))
    });

    c.bench_function("uniform f64", |b| b.iter(|| rng.uniform::<f64>()));

    c.bench_function("bits u128 100", |b| b.iter(|| rng.bits::<u128>(black_box(100))));
}

criterion_group!(benches, bench_raw, bench_uniform);
criterion_main!(benches);
