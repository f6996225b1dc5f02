use criterion::{criterion_group, criterion_main, Criterion};
use rand::RngCore;

use rijndael_core::{encrypt_block, encrypt_cbc, expand_key, State};

fn bench_block(c: &mut Criterion) {
    let key = expand_key(&(0..16).collect::<Vec<u8>>()).unwrap();
    let mut rng = rand::thread_rng();
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    let state = State::from_bytes(&bytes);

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block_128", |b| {
        b.iter(|| encrypt_block(state, &key));
    });
    group.finish();
}

fn bench_chained(c: &mut Criterion) {
    let key = expand_key(&(0..32).collect::<Vec<u8>>()).unwrap();
    let mut rng = rand::thread_rng();
    let blocks: Vec<State> = (0..64)
        .map(|_| {
            let mut bytes = [0u8; 16];
            rng.fill_bytes(&mut bytes);
            State::from_bytes(&bytes)
        })
        .collect();

    let mut group = c.benchmark_group("chained");
    group.sample_size(20);
    group.bench_function("encrypt_cbc_64_blocks_256", |b| {
        b.iter(|| encrypt_cbc(&blocks, &key));
    });
    group.finish();
}

criterion_group!(benches, bench_block, bench_chained);
criterion_main!(benches);
