use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridmaze::{
    walls::{self, EmitMode},
    Algorithm, Generator,
};

const SIZE: usize = 200;

pub fn prim(c: &mut Criterion) {
    c.bench_function("prim_200", |b| {
        b.iter(|| {
            Generator::new(Algorithm::Prim)
                .with_seed(Some(black_box(7)))
                .generate(black_box(SIZE))
                .unwrap()
        })
    });
}

pub fn backtracking(c: &mut Criterion) {
    c.bench_function("backtracking_200", |b| {
        b.iter(|| {
            Generator::new(Algorithm::Backtracking)
                .with_seed(Some(black_box(7)))
                .generate(black_box(SIZE))
                .unwrap()
        })
    });
}

pub fn emit_walls(c: &mut Criterion) {
    let maze = Generator::new(Algorithm::Prim)
        .with_seed(Some(7))
        .generate(SIZE)
        .unwrap();

    c.bench_function("emit_dedup_200", |b| {
        b.iter(|| walls::emit(black_box(&maze.grid), EmitMode::Deduplicated))
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = prim, backtracking, emit_walls}
criterion_main!(benches);
