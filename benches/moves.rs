//! Benchmarks for state expansion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use torus_puzzle::persistence::parse_puzzle;
use torus_puzzle::{find_goals, Expand, State};

fn corner_4x4() -> State {
    parse_puzzle("0 15 14 13 12 11 10 9 8 7 6 5 4 3 2 1", (4, 4)).unwrap()
}

/// Benchmark move generation from a corner, the widest branching case.
fn bench_get_moves(c: &mut Criterion) {
    let state = corner_4x4();

    c.bench_function("get_moves_corner_4x4", |b| {
        b.iter(|| black_box(&state).get_moves())
    });
}

/// Benchmark generating and applying every move.
fn bench_successors(c: &mut Criterion) {
    let state = corner_4x4();

    c.bench_function("successors_corner_4x4", |b| {
        b.iter(|| black_box(&state).successors())
    });
}

/// Benchmark building both goal states for a large grid.
fn bench_find_goals(c: &mut Criterion) {
    let cells: Vec<u32> = (0..100).collect();
    let state = State::new(10, 10, cells).unwrap();

    c.bench_function("find_goals_10x10", |b| {
        b.iter(|| find_goals(black_box(&state)))
    });
}

criterion_group!(benches, bench_get_moves, bench_successors, bench_find_goals);
criterion_main!(benches);
