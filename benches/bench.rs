use conway_life::{next_generation, random_board, Dimensions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SEED: u64 = 42;

fn next_generation_bench<const N: usize>(c: &mut Criterion) {
    let grid = random_board(Dimensions::new(N, N), Some(SEED));
    c.bench_function(&format!("next_generation_{}", N), |b| {
        b.iter(|| next_generation(black_box(&grid)))
    });
}

criterion_group!(
    benches,
    next_generation_bench::<25>,
    next_generation_bench::<256>
);
criterion_main!(benches);
